//! serde `with` modules for the brazilian date formats used on the wire
//!
//! dates are `dd/MM/yyyy` and timestamps `dd/MM/yyyy HH:mm`, matching the
//! formats the rental front office has always exchanged with this API.

/// `dd/MM/yyyy` for `chrono::NaiveDate`
pub mod br_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// `dd/MM/yyyy HH:mm` for `chrono::NaiveDateTime`
pub mod br_datetime {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d/%m/%Y %H:%M";

    pub fn serialize<S>(datetime: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&datetime.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct DateWrapper {
        #[serde(with = "super::br_date")]
        date: NaiveDate,
    }

    #[derive(Serialize, Deserialize)]
    struct DateTimeWrapper {
        #[serde(with = "super::br_datetime")]
        datetime: NaiveDateTime,
    }

    #[test]
    fn serializes_dates_as_dd_mm_yyyy() {
        let wrapper = DateWrapper {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };

        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"date":"01/06/2025"}"#);
    }

    #[test]
    fn parses_dates_from_dd_mm_yyyy() {
        let wrapper: DateWrapper = serde_json::from_str(r#"{"date":"25/12/2024"}"#).unwrap();
        assert_eq!(wrapper.date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
    }

    #[test]
    fn serializes_timestamps_with_minute_precision() {
        let wrapper = DateTimeWrapper {
            datetime: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        };

        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"datetime":"01/06/2025 10:30"}"#);
    }

    #[test]
    fn rejects_iso_formatted_input() {
        let result: Result<DateTimeWrapper, _> =
            serde_json::from_str(r#"{"datetime":"2025-06-01T10:30:00"}"#);
        assert!(result.is_err());
    }
}
