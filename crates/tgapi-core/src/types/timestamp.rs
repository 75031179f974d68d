use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Point in time decoded from a Telegram unix timestamp (seconds, UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    /// Returns `None` when the timestamp is outside the representable range.
    pub fn from_unix_timestamp(seconds: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp(seconds).ok().map(Self)
    }

    pub fn unix_timestamp(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.0.unix_timestamp().to_string())
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

/// Expiry of a ban or restriction.
///
/// Telegram sends `0` for "never lifted"; that value is `Forever`, not the
/// unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UntilDate {
    Forever,
    Date(UtcDateTime),
}

impl UntilDate {
    pub const fn is_forever(self) -> bool {
        matches!(self, Self::Forever)
    }

    pub const fn date(self) -> Option<UtcDateTime> {
        match self {
            Self::Forever => None,
            Self::Date(date) => Some(date),
        }
    }
}

impl Serialize for UntilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Forever => serializer.serialize_i64(0),
            Self::Date(date) => date.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_unix_timestamp_as_rfc3339() {
        let parsed = UtcDateTime::from_unix_timestamp(1_620_000_000).expect("in range");
        assert_eq!(parsed.format_rfc3339(), "2021-05-03T00:00:00Z");
        assert_eq!(parsed.unix_timestamp(), 1_620_000_000);
    }

    #[test]
    fn rejects_out_of_range_timestamp() {
        assert!(UtcDateTime::from_unix_timestamp(i64::MAX).is_none());
    }

    #[test]
    fn forever_has_no_date() {
        assert!(UntilDate::Forever.is_forever());
        assert_eq!(UntilDate::Forever.date(), None);
    }
}
