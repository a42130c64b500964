// crates/shared-kernel/src/value_objects/counts.rs

/// Number of non-blank lines found in a block of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCount(u64);

impl LineCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Count one more line.
    #[inline]
    pub fn bump(&mut self) {
        self.0 += 1;
    }
}

/// Number of lines the declaration heuristic took for a function or method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionCount(u64);

impl FunctionCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn bump(&mut self) {
        self.0 += 1;
    }
}
