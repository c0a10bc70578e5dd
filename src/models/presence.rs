use super::id::RecordId;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Attendance status for one person on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Present,
    Absent,
    /// Late
    Retard,
    /// Leave
    Conge,
}

impl Status {
    /// Wire / CSV code.
    pub fn code(&self) -> &'static str {
        match self {
            Status::Present => "present",
            Status::Absent => "absent",
            Status::Retard => "retard",
            Status::Conge => "conge",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Present => "Présent",
            Status::Absent => "Absent",
            Status::Retard => "Retard",
            Status::Conge => "Congé",
        }
    }

    /// Late still counts as present for stats and filters.
    pub fn counts_as_present(&self) -> bool {
        matches!(self, Status::Present | Status::Retard)
    }
}

/// Label shown for a person with no presence row on the selected date.
pub const UNMARKED_LABEL: &str = "Non marqué";
/// Same, as written in the export.
pub const UNMARKED_CODE: &str = "non marqué";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    pub id: RecordId,
    pub personne_id: RecordId,
    pub date: NaiveDate, // "YYYY-MM-DD", local calendar day
    pub statut: Status,
    #[serde(default)]
    pub notes: String,
}

impl Presence {
    pub fn new(
        id: RecordId,
        personne_id: RecordId,
        date: NaiveDate,
        statut: Status,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            personne_id,
            date,
            statut,
            notes: notes.into(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_for(&self, person_id: &RecordId, date: NaiveDate) -> bool {
        &self.personne_id == person_id && self.date == date
    }
}
