//! Lenient `date` input: an RFC 3339 string or epoch milliseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum DateInput {
    Millis(#[serde(with = "chrono::serde::ts_milliseconds")] DateTime<Utc>),
    Text(DateTime<Utc>),
}

/// For `Option<DateTime<Utc>>` fields; pair with `#[serde(default)]`.
pub fn optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<DateInput>::deserialize(deserializer)?;
    Ok(input.map(|date| match date {
        DateInput::Millis(date) | DateInput::Text(date) => date,
    }))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "optional")]
        date: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_millis_and_text_name_the_same_instant() {
        let millis: Holder = serde_json::from_str(r#"{"date":1709287200000}"#).unwrap();
        let text: Holder = serde_json::from_str(r#"{"date":"2024-03-01T10:00:00Z"}"#).unwrap();

        assert!(millis.date.is_some());
        assert_eq!(millis.date, text.date);
    }

    #[test]
    fn test_null_is_none() {
        let holder: Holder = serde_json::from_str(r#"{"date":null}"#).unwrap();

        assert_eq!(holder.date, None);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(serde_json::from_str::<Holder>(r#"{"date":"yesterday"}"#).is_err());
    }
}
