use cocomo_scan_domain::{Aggregator, ColumnMapping, RawTally};
use cocomo_scan_ports::{
    filesystem::{ApplicationDir, ApplicationSource, TreeScanner},
    report::ReportSink,
};
use cocomo_scan_shared_kernel::{ApplicationError, CocomoError, Result};
use tracing::{info, warn};

/// Outcome of one report run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Applications that got a row, including `{EMPTY}` rows.
    pub measured: usize,
    /// Applications in which nothing was counted.
    pub empty: usize,
    /// Applications whose scan could not start, by name.
    pub failed: Vec<String>,
}

/// Report driver: scan each application on its own, aggregate, emit one row.
pub struct MeasureApplications<'a> {
    scanner: &'a dyn TreeScanner,
    mapping: &'a ColumnMapping,
}

impl<'a> MeasureApplications<'a> {
    pub fn new(scanner: &'a dyn TreeScanner, mapping: &'a ColumnMapping) -> Self {
        Self { scanner, mapping }
    }

    /// Write the header, then one row (and metrics dump) per application.
    ///
    /// A failing application is skipped; a failing report is fatal.
    pub fn run(&self, source: &dyn ApplicationSource, sink: &mut dyn ReportSink) -> Result<RunSummary> {
        let applications = source.applications()?;
        let columns: Vec<&str> = self.mapping.column_names().collect();
        sink.header(&columns).map_err(report_failed("header"))?;

        let mut summary = RunSummary::default();
        for app in &applications {
            info!(application = %app.name, "Working on application");
            let tally = match self.measure(app) {
                Ok(tally) => tally,
                Err(err) => {
                    warn!(application = %app.name, %err, "application skipped");
                    summary.failed.push(app.name.clone());
                    continue;
                }
            };

            if let Err(err) = sink.metrics(app, &tally) {
                warn!(application = %app.name, %err, "raw metrics not written");
            }

            let row = Aggregator::aggregate(&tally, self.mapping);
            if row.is_empty() {
                summary.empty += 1;
            }
            sink.row(app, &row).map_err(report_failed("row"))?;
            summary.measured += 1;
        }

        sink.finish().map_err(report_failed("finish"))?;
        Ok(summary)
    }

    /// Raw tally of a single application, in a result set of its own.
    pub fn measure(&self, app: &ApplicationDir) -> Result<RawTally> {
        let mut tally = RawTally::new();
        self.scanner.scan(&app.path, &mut tally).map_err(|err| ApplicationError::ScanFailed {
            application: app.name.clone(),
            reason: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(tally)
    }
}

fn report_failed(stage: &'static str) -> impl Fn(CocomoError) -> CocomoError {
    move |err| {
        ApplicationError::ReportFailed { reason: format!("{stage}: {err}"), source: Some(Box::new(err)) }.into()
    }
}
