use chrono::{Days, NaiveDate};

use crate::consts::DATE_LABEL_FORMAT;

/// The day a run reports on: the calendar day before `today`
pub(crate) fn report_date(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

pub(crate) fn date_label(date: NaiveDate) -> String {
    date.format(DATE_LABEL_FORMAT).to_string()
}

/// Full English month name, e.g. "June"
pub(crate) fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}
