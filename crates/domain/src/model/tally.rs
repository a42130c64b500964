use std::{collections::BTreeMap, fmt};

/// Write side of a raw result set.
///
/// Counters only ever add; nothing is decremented or removed, so the order in
/// which files are visited never changes the outcome.
pub trait Accumulator {
    /// Add `amount` to `tag`. Adding zero still records the tag.
    fn add(&mut self, tag: &str, amount: u64);

    fn bump(&mut self, tag: &str) {
        self.add(tag, 1);
    }
}

impl<A: Accumulator + ?Sized> Accumulator for &mut A {
    fn add(&mut self, tag: &str, amount: u64) {
        (**self).add(tag, amount);
    }
}

/// Raw tag counts gathered while scanning one application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTally {
    counts: BTreeMap<String, u64>,
}

impl RawTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `tag`; tags never seen are zero.
    pub fn get(&self, tag: &str) -> u64 {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.counts.contains_key(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Tags in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Key-wise sum of `other` into `self`.
    pub fn merge(&mut self, other: &RawTally) {
        for (tag, amount) in other.iter() {
            self.add(tag, amount);
        }
    }
}

impl Accumulator for RawTally {
    fn add(&mut self, tag: &str, amount: u64) {
        match self.counts.get_mut(tag) {
            Some(current) => *current += amount,
            None => {
                self.counts.insert(tag.to_string(), amount);
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for RawTally {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (tag, amount) in iter {
            let tag: String = tag.into();
            tally.add(&tag, amount);
        }
        tally
    }
}

/// Metrics dump: one `tag=count` line per tag, or `{EMPTY}` when nothing was counted.
impl fmt::Display for RawTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(crate::analytics::EMPTY_SENTINEL);
        }
        for (tag, amount) in self.iter() {
            writeln!(f, "{tag}={amount}")?;
        }
        Ok(())
    }
}
