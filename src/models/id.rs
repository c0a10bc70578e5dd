use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Where an identifier was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Remote,
    Local,
}

/// Tagged identifier shared by people and presences.
///
/// Two ids are equal only if both origin and value match, so a server id that
/// happens to look like `local-1700000000000` is never mistaken for one
/// minted on this machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId {
    pub origin: Origin,
    pub value: String,
}

impl RecordId {
    pub fn remote(value: impl Into<String>) -> Self {
        Self {
            origin: Origin::Remote,
            value: value.into(),
        }
    }

    pub fn local(value: impl Into<String>) -> Self {
        Self {
            origin: Origin::Local,
            value: value.into(),
        }
    }

    pub fn is_local(&self) -> bool {
        self.origin == Origin::Local
    }

    pub fn is_remote(&self) -> bool {
        self.origin == Origin::Remote
    }

    /// Numeric suffix of a minted id (`local-123` / `local-pres-123` → 123).
    pub fn minted_number(&self) -> Option<i64> {
        if !self.is_local() {
            return None;
        }
        self.value.rsplit('-').next()?.parse().ok()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

pub const PERSON_PREFIX: &str = "local-";
pub const PRESENCE_PREFIX: &str = "local-pres-";

/// Seeds further ahead of the clock than this are ignored.
const MAX_CLOCK_SKEW_MS: i64 = 24 * 60 * 60 * 1000;

/// Mints local ids from the wall clock in milliseconds, bumping by one when
/// two ids are requested within the same millisecond.
#[derive(Debug, Default)]
pub struct IdMinter {
    last: i64,
}

impl IdMinter {
    /// Start above every local id already present in `existing`.
    ///
    /// Suffixes more than a day ahead of the clock cannot come from this
    /// minter and are skipped; they would otherwise exhaust the counter.
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a RecordId>) -> Self {
        let horizon = Local::now()
            .timestamp_millis()
            .saturating_add(MAX_CLOCK_SKEW_MS);
        let last = existing
            .into_iter()
            .filter_map(RecordId::minted_number)
            .filter(|n| *n <= horizon)
            .max()
            .unwrap_or(0);
        Self { last }
    }

    fn next_number(&mut self) -> i64 {
        let now = Local::now().timestamp_millis();
        self.last = now.max(self.last.saturating_add(1));
        self.last
    }

    pub fn person_id(&mut self) -> RecordId {
        RecordId::local(format!("{PERSON_PREFIX}{}", self.next_number()))
    }

    pub fn presence_id(&mut self) -> RecordId {
        RecordId::local(format!("{PRESENCE_PREFIX}{}", self.next_number()))
    }
}

/// Server ids come back either as JSON strings or as numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}
