use std::fmt;

use crate::{config::ColumnMapping, model::RawTally};

/// Written instead of a row (and instead of the metrics dump) when nothing was scanned.
pub const EMPTY_SENTINEL: &str = "{EMPTY}";

/// Column values for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRow {
    /// The raw tally had no tags at all.
    Empty,
    /// One value per column in column order, followed by their sum.
    Values { columns: Vec<u64>, total: u64 },
}

impl ReportRow {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn columns(&self) -> &[u64] {
        match self {
            Self::Empty => &[],
            Self::Values { columns, .. } => columns,
        }
    }

    pub fn total(&self) -> Option<u64> {
        match self {
            Self::Empty => None,
            Self::Values { total, .. } => Some(*total),
        }
    }
}

/// Comma separated values followed by the total, or the empty sentinel.
impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_SENTINEL),
            Self::Values { columns, total } => {
                for value in columns {
                    write!(f, "{value},")?;
                }
                write!(f, "{total}")
            }
        }
    }
}

/// Folds raw tag counts into report columns.
pub struct Aggregator;

impl Aggregator {
    /// Sum every column's tags (missing tags count as zero) and append the grand total.
    ///
    /// The total only covers tags that belong to some column.
    pub fn aggregate(tally: &RawTally, mapping: &ColumnMapping) -> ReportRow {
        if tally.is_empty() {
            return ReportRow::Empty;
        }

        let columns: Vec<u64> =
            mapping.columns().map(|(_, tags)| tags.iter().map(|tag| tally.get(tag)).sum::<u64>()).collect();
        let total: u64 = columns.iter().sum();
        ReportRow::Values { columns, total }
    }
}
