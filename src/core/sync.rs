//! Sync coordinator: remote first, local mirror as fallback.
//!
//! Every mutation goes through the same two steps:
//!
//! 1. If the session is online and the target record has a server id, call
//!    the remote gateway. On success the server record replaces the local one
//!    and the mirror is refreshed.
//! 2. Otherwise, or when the remote call fails for any reason, apply the
//!    change to the record store directly and persist it through the mirror.
//!
//! The caller gets back which path ran ([`SyncPath`]). Only malformed input
//! is an error ([`ValidationFailure`]); remote and storage failures are
//! absorbed here and logged.

use crate::core::mirror::LocalMirror;
use crate::core::store::RecordStore;
use crate::errors::{RemoteFailure, ValidationFailure};
use crate::models::{IdMinter, Person, PersonDraft, PersonField, Presence, RecordId, Status};
use crate::remote::{PresenceDraft, RemoteGateway, RemoteResult};
use chrono::NaiveDate;

/// Decided once when the session opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    /// Known unreachable (no API configured, or `--offline`): skip remote calls.
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPath {
    /// The server accepted the change.
    Remote,
    /// Stored in the local mirror only.
    LocalFallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome<T> {
    pub path: SyncPath,
    pub value: T,
}

impl<T> SyncOutcome<T> {
    fn remote(value: T) -> Self {
        Self {
            path: SyncPath::Remote,
            value,
        }
    }

    fn local(value: T) -> Self {
        Self {
            path: SyncPath::LocalFallback,
            value,
        }
    }

    pub fn is_local(&self) -> bool {
        self.path == SyncPath::LocalFallback
    }
}

pub type SyncResult<T> = Result<SyncOutcome<T>, ValidationFailure>;

/// Where the session's initial state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Remote,
    Mirror,
}

pub struct SyncCoordinator<G: RemoteGateway> {
    store: RecordStore,
    mirror: LocalMirror,
    gateway: G,
    connectivity: Connectivity,
    minter: IdMinter,
    loaded_from: LoadSource,
}

impl<G: RemoteGateway> SyncCoordinator<G> {
    /// Cold start: load from the API when online, from the mirror otherwise
    /// or when the API cannot be listed.
    pub fn open(gateway: G, mirror: LocalMirror, connectivity: Connectivity) -> Self {
        let (store, loaded_from) = match connectivity {
            Connectivity::Offline => (mirror.load(), LoadSource::Mirror),
            Connectivity::Online => match fetch_all(&gateway) {
                Ok(store) => (store, LoadSource::Remote),
                Err(e) => {
                    log::warn!("could not load roster from API ({e}); using local mirror");
                    (mirror.load(), LoadSource::Mirror)
                }
            },
        };

        let minter = IdMinter::seeded(store.ids());
        log::debug!(
            "session opened ({connectivity:?}, from {loaded_from:?}): {} people, {} presences",
            store.people().len(),
            store.presences().len()
        );

        Self {
            store,
            mirror,
            gateway,
            connectivity,
            minter,
            loaded_from,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn loaded_from(&self) -> LoadSource {
        self.loaded_from
    }

    pub fn mirror(&self) -> &LocalMirror {
        &self.mirror
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Resolve a user-typed id.
    pub fn resolve_person(&self, key: &str) -> Result<RecordId, ValidationFailure> {
        self.store
            .find_person_by_key(key)
            .map(|p| p.id.clone())
            .ok_or_else(|| ValidationFailure::UnknownPerson(key.to_string()))
    }

    // ------------------------------------------------
    // People
    // ------------------------------------------------

    pub fn create_person(&mut self, draft: PersonDraft) -> SyncResult<Person> {
        draft.validate()?;
        let draft = draft.normalized();

        if self.connectivity == Connectivity::Online {
            match self.gateway.create_person(&draft) {
                Ok(person) => {
                    self.store.upsert_person(person.clone());
                    self.persist();
                    self.journal("add", &person.id, &person.full_name(), SyncPath::Remote);
                    return Ok(SyncOutcome::remote(person));
                }
                Err(e) => note_fallback("create person", &e),
            }
        }

        let person = Person::from_draft(self.minter.person_id(), draft);
        self.store.upsert_person(person.clone());
        self.persist();
        self.journal("add", &person.id, &person.full_name(), SyncPath::LocalFallback);
        Ok(SyncOutcome::local(person))
    }

    /// Form edit: every editable field is replaced by the draft.
    pub fn update_person(&mut self, id: &RecordId, draft: PersonDraft) -> SyncResult<Person> {
        draft.validate()?;
        self.require_person(id)?;
        self.apply_person_update(id, draft.normalized(), "edit")
    }

    /// Table edit: one field changes, the rest of the record is kept.
    pub fn edit_person_field(
        &mut self,
        id: &RecordId,
        field: PersonField,
        value: &str,
    ) -> SyncResult<Person> {
        let mut merged = self.require_person(id)?.clone();
        merged.set(field, value.trim().to_string());

        let draft = merged.draft();
        draft.validate()?;
        self.apply_person_update(id, draft.normalized(), "set")
    }

    fn apply_person_update(
        &mut self,
        id: &RecordId,
        draft: PersonDraft,
        operation: &str,
    ) -> SyncResult<Person> {
        if self.remote_allowed(id) {
            match self.gateway.update_person(&id.value, &draft) {
                Ok(person) => {
                    self.store.replace_person(id, person.clone());
                    self.persist();
                    self.journal(operation, id, &person.full_name(), SyncPath::Remote);
                    return Ok(SyncOutcome::remote(person));
                }
                Err(e) => note_fallback("update person", &e),
            }
        }

        let person = Person::from_draft(id.clone(), draft);
        self.store.replace_person(id, person.clone());
        self.persist();
        self.journal(operation, id, &person.full_name(), SyncPath::LocalFallback);
        Ok(SyncOutcome::local(person))
    }

    /// Delete a person and, in cascade, all of their presences.
    ///
    /// After a successful remote delete each presence is deleted remotely as
    /// well; a failing presence delete is ignored. The store and the mirror
    /// are pruned whatever the remote outcome.
    pub fn delete_person(&mut self, id: &RecordId) -> SyncResult<Person> {
        let person = self.require_person(id)?.clone();

        let mut path = SyncPath::LocalFallback;
        if self.remote_allowed(id) {
            match self.gateway.delete_person(&id.value) {
                Ok(()) => {
                    self.cascade_remote_presences(id);
                    path = SyncPath::Remote;
                }
                Err(e) => note_fallback("delete person", &e),
            }
        }

        let pruned = self.store.presences_of(id).count();
        self.store.remove_person(id);
        self.persist();
        self.journal(
            "del",
            id,
            &format!("{} (+{pruned} presences)", person.full_name()),
            path,
        );

        Ok(SyncOutcome { path, value: person })
    }

    fn cascade_remote_presences(&self, person_id: &RecordId) {
        for presence in self.store.presences_of(person_id) {
            if !presence.id.is_remote() {
                continue;
            }
            if let Err(e) = self.gateway.delete_presence(&presence.id.value) {
                log::debug!("cascade delete of presence {} failed: {e}", presence.id);
            }
        }
    }

    // ------------------------------------------------
    // Presences
    // ------------------------------------------------

    /// Set the status of `person_id` on `date`.
    ///
    /// `notes: None` keeps whatever notes the day already has. An existing
    /// presence for the same day is always updated, never duplicated.
    pub fn mark_presence(
        &mut self,
        person_id: &RecordId,
        date: NaiveDate,
        statut: Status,
        notes: Option<&str>,
    ) -> SyncResult<Presence> {
        self.require_person(person_id)?;

        let existing = self.store.find_presence(person_id, date).cloned();
        let notes = match notes {
            Some(n) => n.trim().to_string(),
            None => existing
                .as_ref()
                .map(|p| p.notes.clone())
                .unwrap_or_default(),
        };

        if self.remote_allowed(person_id) {
            let draft = PresenceDraft {
                personne_id: person_id.value.clone(),
                date,
                statut,
                notes: notes.clone(),
            };

            // a local placeholder for this day is replaced by a server create
            let result = match existing.as_ref().filter(|p| p.id.is_remote()) {
                Some(current) => self.gateway.update_presence(&current.id.value, &draft),
                None => self.gateway.create_presence(&draft),
            };

            match result {
                Ok(mut presence) => {
                    presence.personne_id = person_id.clone();
                    presence.date = date;
                    self.store.upsert_presence(presence.clone());
                    self.persist();
                    self.journal_presence(&presence, SyncPath::Remote);
                    return Ok(SyncOutcome::remote(presence));
                }
                Err(e) => note_fallback("mark presence", &e),
            }
        }

        let presence = match existing {
            Some(mut current) => {
                current.statut = statut;
                current.notes = notes;
                current
            }
            None => Presence::new(
                self.minter.presence_id(),
                person_id.clone(),
                date,
                statut,
                notes,
            ),
        };

        self.store.upsert_presence(presence.clone());
        self.persist();
        self.journal_presence(&presence, SyncPath::LocalFallback);
        Ok(SyncOutcome::local(presence))
    }

    /// Notes cell edit: keeps the day's status, or marks present when unmarked.
    pub fn edit_presence_notes(
        &mut self,
        person_id: &RecordId,
        date: NaiveDate,
        notes: &str,
    ) -> SyncResult<Presence> {
        let statut = self
            .store
            .find_presence(person_id, date)
            .map(|p| p.statut)
            .unwrap_or(Status::Present);
        self.mark_presence(person_id, date, statut, Some(notes))
    }

    // ------------------------------------------------
    // Helpers
    // ------------------------------------------------

    fn require_person(&self, id: &RecordId) -> Result<&Person, ValidationFailure> {
        self.store
            .find_person(id)
            .ok_or_else(|| ValidationFailure::UnknownPerson(id.to_string()))
    }

    /// The server can only be asked about records it issued.
    fn remote_allowed(&self, id: &RecordId) -> bool {
        self.connectivity == Connectivity::Online && id.is_remote()
    }

    fn persist(&mut self) {
        if let Err(e) = self.mirror.save(&self.store) {
            log::warn!("could not write local mirror: {e}");
        }
    }

    fn journal(&self, operation: &str, id: &RecordId, message: &str, path: SyncPath) {
        let via = match path {
            SyncPath::Remote => "remote",
            SyncPath::LocalFallback => "local",
        };
        self.mirror
            .journal(operation, &id.to_string(), &format!("{message} [{via}]"));
    }

    fn journal_presence(&self, presence: &Presence, path: SyncPath) {
        let message = format!("{} {}", presence.date_str(), presence.statut.code());
        self.journal("mark", &presence.personne_id, &message, path);
    }
}

fn fetch_all<G: RemoteGateway>(gateway: &G) -> RemoteResult<RecordStore> {
    let people = gateway.list_people()?;
    let presences = gateway.list_presences()?;
    Ok(RecordStore::from_parts(people, presences))
}

fn note_fallback(what: &str, err: &RemoteFailure) {
    log::info!("{what}: remote call failed ({err}), storing locally");
}
