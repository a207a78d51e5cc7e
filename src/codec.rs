//! Serde codecs for the date formats the Visoma wire protocol uses.
//!
//! Timestamps travel as ISO 8601 text and are written back with a space
//! separator; calendar dates use the `DD.MM.YYYY` form. Each record field
//! opts into the codec it needs via `#[serde(with = ...)]`, so there is no
//! process-wide format registration.

use chrono::{NaiveDateTime, Timelike};

/// Calendar date format used by project fields.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Accepted timestamp shapes, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn parse_datetime(raw: &str) -> Result<NaiveDateTime, String> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| format!("invalid datetime: {raw:?}"))
}

/// Formats a timestamp the way the service writes them: space separator,
/// fractional seconds only when present.
fn format_datetime(value: &NaiveDateTime) -> String {
    if value.nanosecond() == 0 {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

/// Codec for required timestamp fields.
pub(crate) mod datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_datetime(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_datetime(&raw).map_err(de::Error::custom)
    }
}

/// Codec for optional timestamp fields.
pub(crate) mod datetime_opt {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(datetime) => serializer.serialize_str(&super::format_datetime(datetime)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_datetime(&raw).map_err(de::Error::custom))
            .transpose()
    }
}

/// Codec for optional calendar date fields.
pub(crate) mod date_opt {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => {
                serializer.serialize_str(&date.format(super::DATE_FORMAT).to_string())
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, super::DATE_FORMAT).map_err(de::Error::custom)
            })
            .transpose()
    }
}
