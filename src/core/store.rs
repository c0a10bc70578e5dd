//! In-memory roster: the single source of truth for people and presences.

use crate::models::{Person, Presence, RecordId};
use chrono::NaiveDate;

pub const LOCAL_QUALIFIER: &str = "local:";
pub const REMOTE_QUALIFIER: &str = "remote:";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    people: Vec<Person>,
    presences: Vec<Presence>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded collections.
    ///
    /// Presences go through `upsert_presence`, so a snapshot holding two rows
    /// for the same (person, date) collapses to the last one.
    pub fn from_parts(people: Vec<Person>, presences: Vec<Presence>) -> Self {
        let mut store = Self {
            people: Vec::with_capacity(people.len()),
            presences: Vec::with_capacity(presences.len()),
        };
        for p in people {
            store.upsert_person(p);
        }
        for p in presences {
            store.upsert_presence(p);
        }
        store
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn presences(&self) -> &[Presence] {
        &self.presences
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.presences.is_empty()
    }

    pub fn find_person(&self, id: &RecordId) -> Option<&Person> {
        self.people.iter().find(|p| &p.id == id)
    }

    /// Resolve an id as typed by a user (its display form).
    ///
    /// `local:<id>` and `remote:<id>` pick the namespace explicitly. A bare id
    /// prefers the local record when both namespaces hold the same text.
    pub fn find_person_by_key(&self, key: &str) -> Option<&Person> {
        let key = key.trim();
        if let Some(value) = key.strip_prefix(LOCAL_QUALIFIER) {
            return self.find_person(&RecordId::local(value));
        }
        if let Some(value) = key.strip_prefix(REMOTE_QUALIFIER) {
            return self.find_person(&RecordId::remote(value));
        }

        self.people
            .iter()
            .find(|p| p.id.is_local() && p.id.value == key)
            .or_else(|| self.people.iter().find(|p| p.id.value == key))
    }

    pub fn find_presence(&self, person_id: &RecordId, date: NaiveDate) -> Option<&Presence> {
        self.presences.iter().find(|p| p.is_for(person_id, date))
    }

    pub fn presences_of<'a>(&'a self, person_id: &'a RecordId) -> impl Iterator<Item = &'a Presence> {
        self.presences
            .iter()
            .filter(move |p| &p.personne_id == person_id)
    }

    /// Replace the person with the same id in place, or append.
    pub fn upsert_person(&mut self, record: Person) {
        match self.people.iter_mut().find(|p| p.id == record.id) {
            Some(slot) => *slot = record,
            None => self.people.push(record),
        }
    }

    /// Put `record` where `id` used to be, keeping display order.
    ///
    /// Presences pointing at `id` are re-pointed when the record comes back
    /// with a different id.
    pub fn replace_person(&mut self, id: &RecordId, record: Person) {
        let Some(idx) = self.people.iter().position(|p| &p.id == id) else {
            self.upsert_person(record);
            return;
        };

        if &record.id != id {
            for pres in self.presences.iter_mut().filter(|p| &p.personne_id == id) {
                pres.personne_id = record.id.clone();
            }
        }
        self.people[idx] = record;
    }

    /// Remove a person and every presence that references it.
    pub fn remove_person(&mut self, id: &RecordId) -> Option<Person> {
        let idx = self.people.iter().position(|p| &p.id == id)?;
        let removed = self.people.remove(idx);
        self.remove_presences_of(id);
        Some(removed)
    }

    /// Keyed by (person, date): replaces an existing match in place or appends.
    pub fn upsert_presence(&mut self, record: Presence) {
        match self
            .presences
            .iter_mut()
            .find(|p| p.is_for(&record.personne_id, record.date))
        {
            Some(slot) => *slot = record,
            None => self.presences.push(record),
        }
    }

    pub fn remove_presences_of(&mut self, person_id: &RecordId) -> usize {
        let before = self.presences.len();
        self.presences.retain(|p| &p.personne_id != person_id);
        before - self.presences.len()
    }

    /// Every id currently held, people and presences alike.
    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.people
            .iter()
            .map(|p| &p.id)
            .chain(self.presences.iter().map(|p| &p.id))
    }
}
