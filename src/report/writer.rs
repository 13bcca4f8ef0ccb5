//! Append-only monthly CSV report
//!
//! Rows are staged with `add_row` and appended by `export_csv`. The header is
//! written only when `export_csv` creates the file; an existing file is never
//! rewritten, so earlier days' rows survive every run.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::consts::REPORT_PREFIX;
use crate::error::ReportError;
use crate::utils::{date_label, month_name};

/// One day's attendance figure: `06-14,42`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ReportRow {
    pub(crate) date: String,
    pub(crate) count: u64,
}

impl ReportRow {
    pub(crate) fn new(date: NaiveDate, count: u64) -> Self {
        Self {
            date: date_label(date),
            count,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Report {
    path: PathBuf,
    rows: Vec<ReportRow>,
}

impl Report {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rows: Vec::new(),
        }
    }

    /// `<dir>/Attendance Count - <Month>.csv` for the month containing `date`.
    /// Callers pass the reported day, so a run on the 1st lands in the
    /// previous month's file rather than the month the run happens in.
    pub(crate) fn monthly(dir: &Path, date: NaiveDate) -> Self {
        Self::new(dir.join(monthly_file_name(date)))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub(crate) fn add_row(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    /// Append every staged row and clear the stage. `header` is written first
    /// only if this call creates the file. Returns the number of rows written.
    pub(crate) fn export_csv(&mut self, header: Option<&[&str]>) -> Result<usize, ReportError> {
        let created = !self.exists();
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| ReportError::Open {
                path: self.path.clone(),
                source,
            })?;

        if !created {
            self.terminate_last_line(&mut file)?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);

        if created && let Some(header) = header {
            writer
                .write_record(header)
                .map_err(|source| ReportError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            debug!(path = %self.path.display(), "wrote report header");
        }

        let written = self.rows.len();
        for row in self.rows.drain(..) {
            writer
                .serialize(&row)
                .map_err(|source| ReportError::Write {
                    path: self.path.clone(),
                    source,
                })?;
        }

        writer.flush().map_err(|source| ReportError::Flush {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), rows = written, created, "report updated");
        Ok(written)
    }

    /// Read back the data rows (header skipped when present).
    pub(crate) fn read_rows(&self) -> Result<Vec<(String, String)>, ReportError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|source| ReportError::Read {
                path: self.path.clone(),
                source,
            })?;

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|source| ReportError::Read {
                path: self.path.clone(),
                source,
            })?;
            let date = record.get(0).unwrap_or_default().to_string();
            let count = record.get(1).unwrap_or_default().to_string();
            if index == 0 && count.parse::<u64>().is_err() {
                continue;
            }
            rows.push((date, count));
        }
        Ok(rows)
    }

    /// A hand-edited file may lack a final newline; appending straight after
    /// it would glue the new row onto the last one.
    fn terminate_last_line(&self, file: &mut File) -> Result<(), ReportError> {
        let io_err = |source| ReportError::Repair {
            path: self.path.clone(),
            source,
        };
        let len = file.metadata().map_err(io_err)?.len();
        if len == 0 {
            return Ok(());
        }
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1)).map_err(io_err)?;
        file.read_exact(&mut last).map_err(io_err)?;
        if last[0] != b'\n' {
            file.write_all(b"\n").map_err(io_err)?;
        }
        Ok(())
    }
}

pub(crate) fn monthly_file_name(date: NaiveDate) -> String {
    format!("{REPORT_PREFIX} - {}.csv", month_name(date))
}
