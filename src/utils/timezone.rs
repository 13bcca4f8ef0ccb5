use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone the campus calendar day is computed in
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Calendar date in this zone at the given instant
    pub(crate) fn date_at(self, utc: DateTime<Utc>) -> NaiveDate {
        self.to_fixed_offset(utc).date_naive()
    }

    pub(crate) fn today(self) -> NaiveDate {
        self.date_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_string_case_insensitive() {
        for raw in ["local", "LOCAL", "  Local  ", ""] {
            assert!(matches!(
                Timezone::parse(Some(raw)).unwrap(),
                Timezone::Local
            ));
        }
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z"] {
            let tz = Timezone::parse(Some(raw)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::America::New_York)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn date_at_utc_keeps_calendar_day() {
        let utc = "2026-06-15T02:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::Named(chrono_tz::UTC);
        assert_eq!(tz.date_at(utc), NaiveDate::from_ymd_opt(2026, 6, 15).unwrap());
    }

    #[test]
    fn date_at_named_can_fall_on_previous_day() {
        // 02:00 UTC is 22:00 the previous evening in New York (EDT, UTC-4)
        let utc = "2026-06-15T02:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert_eq!(tz.date_at(utc), NaiveDate::from_ymd_opt(2026, 6, 14).unwrap());
    }
}
