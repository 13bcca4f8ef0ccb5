use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Missing environment variable {name}")]
    MissingEnv { name: &'static str },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Report(#[from] ReportError),
}

/// Failures talking to the Meraki Dashboard API. None of them are retried.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Meraki API rejected the API key (HTTP {status}) for {url}")]
    Unauthorized { status: u16, url: String },

    #[error("Meraki network not found (HTTP 404) for {url}")]
    NetworkNotFound { url: String },

    #[error("Meraki API returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        source: Box<ureq::Error>,
    },

    #[error("Unexpected response shape from {url}: {source}")]
    MalformedResponse {
        url: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub(crate) enum ReportError {
    #[error("Failed to open report {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write report {}: {source}", path.display())]
    Write { path: PathBuf, source: csv::Error },

    #[error("Failed to repair last line of report {}: {source}", path.display())]
    Repair {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to flush report {}: {source}", path.display())]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read report {}: {source}", path.display())]
    Read { path: PathBuf, source: csv::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_missing_env() {
        let e = AppError::MissingEnv {
            name: "MERAKI_API_KEY",
        };
        assert_eq!(e.to_string(), "Missing environment variable MERAKI_API_KEY");
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn api_error_unauthorized() {
        let e = ApiError::Unauthorized {
            status: 401,
            url: "https://example.test/clients".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Meraki API rejected the API key (HTTP 401) for https://example.test/clients"
        );
    }

    #[test]
    fn api_error_not_found() {
        let e = ApiError::NetworkNotFound {
            url: "https://example.test/networks/N_1/clients".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Meraki network not found (HTTP 404) for https://example.test/networks/N_1/clients"
        );
    }

    #[test]
    fn app_error_from_api_error() {
        let api = ApiError::Status {
            status: 503,
            url: "u".to_string(),
        };
        let app: AppError = api.into();
        assert_eq!(app.to_string(), "Meraki API returned HTTP 503 for u");
    }

    #[test]
    fn report_error_open_includes_path() {
        let e = ReportError::Open {
            path: PathBuf::from("Attendance Count - June.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            e.to_string(),
            "Failed to open report Attendance Count - June.csv: denied"
        );
    }
}
