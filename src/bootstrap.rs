use std::path::Path;

use anyhow::Result;
use cocomo_scan_infra::{
    CommandFileApplications, CsvReportSink, DiscoveredApplications, WalkingScanner,
    config::{load_column_mapping, load_scan_profile},
};
use cocomo_scan_shared_kernel::{ApplicationError, ApplicationResult, ErrorContext};
use cocomo_scan_usecase::{MeasureApplications, RunSummary};
use tracing::info;

use crate::cli::Args;

/// The source root must be an existing directory, in both discovery and command-file mode.
pub fn check_root(path: &Path) -> ApplicationResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ApplicationError::InvalidRoot { path: path.to_path_buf() })
    }
}

/// Load configuration, wire the adapters and write the report.
pub fn run(args: &Args) -> Result<RunSummary> {
    args.validate()?;
    check_root(&args.source_dir)?;

    let mapping = load_column_mapping(&args.report_config);
    let scanner = WalkingScanner::new(load_scan_profile(args.config_dir.as_deref()));
    let mut sink = CsvReportSink::create(&args.report_file, !args.no_metrics)
        .with_context(|| format!("creating report {}", args.report_file.display()))?;

    let driver = MeasureApplications::new(&scanner, &mapping);
    let summary = match &args.command_file {
        Some(file) => {
            info!(command_file = %file.display(), "applications listed in command file");
            driver.run(&CommandFileApplications::new(file), &mut sink)?
        }
        None => driver.run(&DiscoveredApplications::new(&args.source_dir), &mut sink)?,
    };

    info!(
        measured = summary.measured,
        empty = summary.empty,
        failed = summary.failed.len(),
        "report written"
    );
    Ok(summary)
}
