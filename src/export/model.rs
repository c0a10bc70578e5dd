use crate::core::query::presence_for;
use crate::core::store::RecordStore;
use crate::models::presence::UNMARKED_CODE;
use chrono::NaiveDate;
use serde::Serialize;

/// One exported line: a person and their status on the chosen day.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DailyRow {
    pub prenom: String,
    pub nom: String,
    pub email: String,
    pub poste: String,
    /// Status code, or "non marqué".
    pub statut: String,
    pub notes: String,
}

pub(crate) const HEADERS: [&str; 6] = ["Prénom", "Nom", "Email", "Poste", "Statut", "Notes"];

/// Every person of the roster, in roster order, with that day's presence.
pub fn daily_rows(store: &RecordStore, date: NaiveDate) -> Vec<DailyRow> {
    store
        .people()
        .iter()
        .map(|person| {
            let presence = presence_for(store, person, date);
            DailyRow {
                prenom: person.prenom.clone(),
                nom: person.nom.clone(),
                email: person.email.clone(),
                poste: person.poste.clone(),
                statut: presence
                    .map(|p| p.statut.code().to_string())
                    .unwrap_or_else(|| UNMARKED_CODE.to_string()),
                notes: presence.map(|p| p.notes.clone()).unwrap_or_default(),
            }
        })
        .collect()
}
