//! Event kind enum as the single source of truth for event type strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two device events that matter for wait-time reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A rider pressed the call button on a landing.
    ButtonCall,
    /// The cab doors opened on a landing.
    DoorOpen,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ButtonCall => "button_call",
            Self::DoorOpen => "door_open",
        };
        write!(f, "{s}")
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button_call" => Ok(Self::ButtonCall),
            "door_open" => Ok(Self::DoorOpen),
            _ => Err(UnknownEventKind(s.to_string())),
        }
    }
}

impl Serialize for EventKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown event kind strings.
#[derive(Debug, Clone)]
pub struct UnknownEventKind(String);

impl fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event kind: {}", self.0)
    }
}

impl std::error::Error for UnknownEventKind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_variants() {
        for variant in [EventKind::ButtonCall, EventKind::DoorOpen] {
            let s = variant.to_string();
            let parsed: EventKind = s.parse().expect("should parse");
            assert_eq!(parsed, variant, "roundtrip failed for {variant:?}");
        }
    }

    #[test]
    fn wire_strings_parse() {
        let call: EventKind = "button_call".parse().expect("should parse");
        assert_eq!(call, EventKind::ButtonCall);

        let open: EventKind = "door_open".parse().expect("should parse");
        assert_eq!(open, EventKind::DoorOpen);
    }

    #[test]
    fn unknown_kind_errors() {
        let result: Result<EventKind, _> = "door_close".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "unknown event kind: door_close");
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&EventKind::ButtonCall).unwrap();
        assert_eq!(json, "\"button_call\"");
        let parsed: EventKind = serde_json::from_str("\"door_open\"").unwrap();
        assert_eq!(parsed, EventKind::DoorOpen);
    }
}
