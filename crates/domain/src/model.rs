pub mod classification;
pub mod tags;
pub mod tally;

pub use classification::{FileAction, Route, classify};
pub use tally::{Accumulator, RawTally};
