//! Durations in the config file: whole seconds (`10`) or humantime text (`"1m30s"`)

use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Seconds(u64),
    Text(String),
}

impl RawDuration {
    fn parse<E: serde::de::Error>(self) -> Result<Duration, E> {
        match self {
            Self::Seconds(secs) => Ok(Duration::from_secs(secs)),
            Self::Text(text) => humantime::parse_duration(&text)
                .map_err(|e| E::custom(format!("Invalid duration '{text}': {e}"))),
        }
    }
}

fn to_text(duration: &Duration) -> String {
    humantime::format_duration(*duration).to_string()
}

/// For `Duration` fields
pub mod duration {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_text(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        RawDuration::deserialize(deserializer)?.parse()
    }
}

/// For `Option<Duration>` fields; pair with `default` and `skip_serializing_if`
pub mod option_duration {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_some(&to_text(d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Option::<RawDuration>::deserialize(deserializer)?
            .map(RawDuration::parse)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Timeouts {
        #[serde(with = "duration")]
        connect: Duration,
        #[serde(default, with = "option_duration", skip_serializing_if = "Option::is_none")]
        total: Option<Duration>,
    }

    #[test]
    fn test_seconds_and_text_forms() {
        let parsed: Timeouts = toml::from_str("connect = 5\ntotal = \"1m30s\"\n").unwrap();
        assert_eq!(parsed.connect, Duration::from_secs(5));
        assert_eq!(parsed.total, Some(Duration::from_secs(90)));

        let parsed: Timeouts = toml::from_str("connect = \"250ms\"\n").unwrap();
        assert_eq!(parsed.connect, Duration::from_millis(250));
        assert_eq!(parsed.total, None);
    }

    #[test]
    fn test_invalid_text_is_rejected() {
        let error = toml::from_str::<Timeouts>("connect = \"soon\"\n").unwrap_err();
        assert!(error.to_string().contains("Invalid duration 'soon'"));
    }

    #[test]
    fn test_serializes_as_text() {
        let timeouts = Timeouts {
            connect: Duration::from_secs(10),
            total: None,
        };
        let text = toml::to_string(&timeouts).unwrap();
        assert_eq!(text.trim(), "connect = \"10s\"");
        assert_eq!(toml::from_str::<Timeouts>(&text).unwrap(), timeouts);
    }
}
