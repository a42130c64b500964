use std::collections::{BTreeMap, BTreeSet};

/// Report columns and the raw tags summed into each of them.
///
/// Columns iterate sorted by name, so the header and every row line up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: BTreeMap<String, BTreeSet<String>>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `column -> "tag,tag,..."` pairs. Blank tags are dropped and a
    /// repeated column keeps its last definition.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut mapping = Self::new();
        for (column, raw) in pairs {
            let tags = raw.as_ref().split(',').map(str::trim).filter(|t| !t.is_empty());
            mapping.set_column(column.as_ref().trim(), tags);
        }
        mapping
    }

    /// Define (or replace) `column` as the sum of `tags`.
    pub fn set_column<I, T>(&mut self, column: &str, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.columns.insert(column.to_string(), tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.columns.iter().map(|(name, tags)| (name.as_str(), tags))
    }

    pub fn tags_of(&self, column: &str) -> Option<&BTreeSet<String>> {
        self.columns.get(column)
    }
}
