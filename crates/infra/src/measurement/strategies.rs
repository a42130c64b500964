pub mod line_based;
pub mod markup_based;

pub use line_based::{Mode, count_text, record_code, record_keywords, record_plain};
pub use markup_based::{StructuralCounter, parse_document};
