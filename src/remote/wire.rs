//! JSON shapes exchanged with the API.

use super::PresenceDraft;
use crate::models::id::string_or_number;
use crate::models::person::DEFAULT_AVATAR_COLOR;
use crate::models::{Person, PersonDraft, Presence, RecordId, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `GET tables/...` envelope.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct WirePerson {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub poste: Option<String>,
    #[serde(default)]
    pub avatar_color: Option<String>,
}

impl From<WirePerson> for Person {
    fn from(w: WirePerson) -> Self {
        Person {
            id: RecordId::remote(w.id),
            nom: w.nom,
            prenom: w.prenom,
            email: w.email.unwrap_or_default(),
            poste: w.poste.unwrap_or_default(),
            avatar_color: w
                .avatar_color
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AVATAR_COLOR.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PersonBody<'a> {
    pub nom: &'a str,
    pub prenom: &'a str,
    pub email: &'a str,
    pub poste: &'a str,
    pub avatar_color: &'a str,
}

impl<'a> From<&'a PersonDraft> for PersonBody<'a> {
    fn from(d: &'a PersonDraft) -> Self {
        Self {
            nom: &d.nom,
            prenom: &d.prenom,
            email: &d.email,
            poste: &d.poste,
            avatar_color: &d.avatar_color,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WirePresence {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub personne_id: String,
    pub date: NaiveDate,
    pub statut: Status,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<WirePresence> for Presence {
    /// Presences stored on the server only ever reference server-side people.
    fn from(w: WirePresence) -> Self {
        Presence {
            id: RecordId::remote(w.id),
            personne_id: RecordId::remote(w.personne_id),
            date: w.date,
            statut: w.statut,
            notes: w.notes.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PresenceBody<'a> {
    pub personne_id: &'a str,
    pub date: String,
    pub statut: Status,
    pub notes: &'a str,
}

impl<'a> From<&'a PresenceDraft> for PresenceBody<'a> {
    fn from(d: &'a PresenceDraft) -> Self {
        Self {
            personne_id: &d.personne_id,
            date: d.date.format("%Y-%m-%d").to_string(),
            statut: d.statut,
            notes: &d.notes,
        }
    }
}
