use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier assigned to every stored record.
///
/// Ids are UUIDv7, so their byte order follows creation time. This lets
/// ordered backends list a collection in roughly the order it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RecordId {
    type Err = ServiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ServiceError::InvalidId(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        let id = RecordId::generate();
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_malformed_value() {
        let err = "67d4cc6fdb".parse::<RecordId>().unwrap_err();
        assert!(matches!(err, ServiceError::InvalidId(ref v) if v == "67d4cc6fdb"));
        assert_eq!(
            err.to_string(),
            "Cast to RecordId failed for value \"67d4cc6fdb\""
        );
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        let padded = format!(" {} ", RecordId::generate());
        assert!(padded.parse::<RecordId>().is_err());
    }

    #[test]
    fn test_generated_ids_are_ordered() {
        let first = RecordId::generate();
        let second = RecordId::generate();
        assert!(first < second);
    }
}
