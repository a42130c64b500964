// crates/ports/src/report.rs
use cocomo_scan_domain::{RawTally, ReportRow};
use cocomo_scan_shared_kernel::Result;

use crate::filesystem::ApplicationDir;

/// Port receiving the report as it is produced, one application at a time.
pub trait ReportSink {
    /// Called once before any row, with the column names in report order.
    fn header(&mut self, columns: &[&str]) -> Result<()>;

    fn row(&mut self, application: &ApplicationDir, row: &ReportRow) -> Result<()>;

    /// Raw tag dump for diagnosing the column mapping.
    fn metrics(&mut self, application: &ApplicationDir, tally: &RawTally) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}
