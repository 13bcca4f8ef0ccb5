pub(crate) mod date;
pub(crate) mod logging;
pub(crate) mod timezone;

pub(crate) use date::{date_label, month_name, report_date};
pub(crate) use logging::init_logging;
pub(crate) use timezone::Timezone;
