use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::consts::REPORT_HEADER;
use crate::core::{DeviceName, PageSource, count_devices};
use crate::error::AppError;
use crate::meraki::MerakiClient;
use crate::report::{Report, ReportRow, print_report_table};
use crate::utils::report_date;

/// What one run produced
#[derive(Debug)]
pub(crate) struct RunOutcome {
    pub(crate) row: ReportRow,
    pub(crate) report_path: PathBuf,
    pub(crate) written: bool,
}

/// Count yesterday's devices via `source` and append the row to the month's
/// report. With `dry_run` the report file is left alone.
pub(crate) fn generate_report<S>(
    config: &RunConfig,
    source: &S,
    today: NaiveDate,
    dry_run: bool,
) -> Result<RunOutcome, AppError>
where
    S: PageSource,
    S::Item: DeviceName,
{
    let date = report_date(today);
    info!(
        network = %config.network_id,
        window_seconds = config.window_seconds,
        prefix = %config.prefix,
        "counting devices"
    );
    let count = count_devices(source, &config.prefix)?;
    let row = ReportRow::new(date, count as u64);
    info!(date = %row.date, count, "device count ready");

    let mut report = Report::monthly(&config.output_dir, date);
    if dry_run {
        return Ok(RunOutcome {
            row,
            report_path: report.path().to_path_buf(),
            written: false,
        });
    }

    report.add_row(row.clone());
    if report.exists() {
        report.export_csv(None)?;
    } else {
        report.export_csv(Some(REPORT_HEADER))?;
    }

    Ok(RunOutcome {
        row,
        report_path: report.path().to_path_buf(),
        written: true,
    })
}

pub(crate) fn run(cli: &Cli, config: &RunConfig) -> Result<(), AppError> {
    let client = MerakiClient::new(config);
    let today = config.timezone.today();
    let outcome = generate_report(config, &client, today, cli.dry_run)?;

    if outcome.written {
        println!(
            "{}: {} devices -> {}",
            outcome.row.date,
            outcome.row.count,
            outcome.report_path.display()
        );
    } else {
        println!(
            "{}: {} devices (dry run, {} not modified)",
            outcome.row.date,
            outcome.row.count,
            outcome.report_path.display()
        );
    }

    if cli.show && outcome.written {
        print_report_table(&Report::new(&outcome.report_path), cli.use_color())?;
    }
    Ok(())
}
