/// Month-day label written in the report's Date column: "06-14"
pub(crate) const DATE_LABEL_FORMAT: &str = "%m-%d";

/// Device names that count toward attendance start with this
pub(crate) const DEVICE_PREFIX: &str = "UHM-";

/// Lookback window for one daily run (24 hours)
pub(crate) const DAY_SECONDS: u64 = 86_400;

/// Default page size for the clients listing
pub(crate) const PAGE_SIZE: u32 = 1000;

pub(crate) const DEFAULT_BASE_URL: &str = "https://dashboard.meraki.com/api/v1";

pub(crate) const API_KEY_HEADER: &str = "X-Cisco-Meraki-API-Key";

pub(crate) const REPORT_PREFIX: &str = "Attendance Count";

pub(crate) const REPORT_HEADER: &[&str] = &["Date", "Device Count"];

pub(crate) const ENV_API_KEY: &str = "MERAKI_API_KEY";
pub(crate) const ENV_NETWORK_ID: &str = "NETWORK_ID";
pub(crate) const ENV_BASE_URL: &str = "MERAKI_BASE_URL";
