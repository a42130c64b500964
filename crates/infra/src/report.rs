// crates/infra/src/report.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use cocomo_scan_domain::{RawTally, ReportRow};
use cocomo_scan_ports::{filesystem::ApplicationDir, report::ReportSink};
use cocomo_scan_shared_kernel::{InfrastructureError, Result, path::with_raw_suffix};
use tracing::debug;

use crate::persistence::FileWriter;

/// Suffix appended verbatim to an application directory for its raw metrics dump.
pub const METRICS_SUFFIX: &str = "app.metrics";

/// Writes the CSV report and, optionally, one metrics file per application.
pub struct CsvReportSink<W: Write> {
    out: W,
    write_metrics: bool,
}

impl CsvReportSink<BufWriter<File>> {
    /// Create (replacing) the report file at `path`.
    pub fn create(path: &Path, write_metrics: bool) -> Result<Self> {
        let out = FileWriter::create(path)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        Ok(Self::new(out, write_metrics))
    }
}

impl<W: Write> CsvReportSink<W> {
    pub fn new(out: W, write_metrics: bool) -> Self {
        Self { out, write_metrics }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for CsvReportSink<W> {
    fn header(&mut self, columns: &[&str]) -> Result<()> {
        write!(self.out, "Application")?;
        for column in columns {
            write!(self.out, ",{}", escape_field(column))?;
        }
        writeln!(self.out, ",Total")?;
        Ok(())
    }

    fn row(&mut self, application: &ApplicationDir, row: &ReportRow) -> Result<()> {
        writeln!(self.out, "{},{row}", escape_field(&application.name))?;
        // rows are flushed one by one so a crash keeps the finished applications
        self.out.flush()?;
        Ok(())
    }

    fn metrics(&mut self, application: &ApplicationDir, tally: &RawTally) -> Result<()> {
        if !self.write_metrics {
            return Ok(());
        }
        let path = metrics_path(&application.path);
        FileWriter::write_all(&path, tally.to_string().as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
        debug!(path = %path.display(), tags = tally.len(), "metrics written");
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// `<absolute application dir>app.metrics`, next to the directory rather than inside it.
pub fn metrics_path(application_dir: &Path) -> std::path::PathBuf {
    with_raw_suffix(application_dir, METRICS_SUFFIX)
}

/// Quote a CSV field only when it would otherwise break the row.
fn escape_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        let escaped = s.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        s.to_string()
    }
}
