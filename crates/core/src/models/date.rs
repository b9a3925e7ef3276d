use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse an ISO-8601 date or date-time into a calendar day (UTC).
///
/// Accepts `2024-03-01`, RFC 3339 (`2024-03-01T23:30:00-02:00` lands on
/// 2024-03-02 once converted to UTC) and naive `2024-03-01T10:00:00[.fff]`.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Serde adapter: deserialize an ISO date or date-time string into `NaiveDate`.
/// Serializes back as `YYYY-MM-DD`.
pub mod iso {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("malformed date '{raw}'")))
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }
}
