//! Remote gateway: CRUD calls against the roster API.
//!
//! One method per (entity, operation). Every failure is a [`RemoteFailure`];
//! the gateway never retries and never touches the local state. Deciding
//! what to do about a failure is the sync coordinator's job.

pub mod http;
pub mod wire;

use crate::errors::RemoteFailure;
use crate::models::{Person, PersonDraft, Presence, Status};
use chrono::NaiveDate;

pub use http::HttpGateway;

/// Body of a presence create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceDraft {
    /// Server-side id of the person.
    pub personne_id: String,
    pub date: NaiveDate,
    pub statut: Status,
    pub notes: String,
}

pub type RemoteResult<T> = Result<T, RemoteFailure>;

pub trait RemoteGateway {
    fn list_people(&self) -> RemoteResult<Vec<Person>>;
    fn create_person(&self, data: &PersonDraft) -> RemoteResult<Person>;
    fn update_person(&self, id: &str, data: &PersonDraft) -> RemoteResult<Person>;
    fn delete_person(&self, id: &str) -> RemoteResult<()>;

    fn list_presences(&self) -> RemoteResult<Vec<Presence>>;
    fn create_presence(&self, data: &PresenceDraft) -> RemoteResult<Presence>;
    fn update_presence(&self, id: &str, data: &PresenceDraft) -> RemoteResult<Presence>;
    fn delete_presence(&self, id: &str) -> RemoteResult<()>;
}

/// Gateway for sessions that never talk to a server.
/// Every call fails, which sends each mutation down the local path.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRemote;

impl NoRemote {
    fn unavailable<T>() -> RemoteResult<T> {
        Err(RemoteFailure::Network("no remote API configured".into()))
    }
}

impl RemoteGateway for NoRemote {
    fn list_people(&self) -> RemoteResult<Vec<Person>> {
        Self::unavailable()
    }
    fn create_person(&self, _: &PersonDraft) -> RemoteResult<Person> {
        Self::unavailable()
    }
    fn update_person(&self, _: &str, _: &PersonDraft) -> RemoteResult<Person> {
        Self::unavailable()
    }
    fn delete_person(&self, _: &str) -> RemoteResult<()> {
        Self::unavailable()
    }
    fn list_presences(&self) -> RemoteResult<Vec<Presence>> {
        Self::unavailable()
    }
    fn create_presence(&self, _: &PresenceDraft) -> RemoteResult<Presence> {
        Self::unavailable()
    }
    fn update_presence(&self, _: &str, _: &PresenceDraft) -> RemoteResult<Presence> {
        Self::unavailable()
    }
    fn delete_presence(&self, _: &str) -> RemoteResult<()> {
        Self::unavailable()
    }
}

impl<G: RemoteGateway + ?Sized> RemoteGateway for Box<G> {
    fn list_people(&self) -> RemoteResult<Vec<Person>> {
        (**self).list_people()
    }
    fn create_person(&self, data: &PersonDraft) -> RemoteResult<Person> {
        (**self).create_person(data)
    }
    fn update_person(&self, id: &str, data: &PersonDraft) -> RemoteResult<Person> {
        (**self).update_person(id, data)
    }
    fn delete_person(&self, id: &str) -> RemoteResult<()> {
        (**self).delete_person(id)
    }
    fn list_presences(&self) -> RemoteResult<Vec<Presence>> {
        (**self).list_presences()
    }
    fn create_presence(&self, data: &PresenceDraft) -> RemoteResult<Presence> {
        (**self).create_presence(data)
    }
    fn update_presence(&self, id: &str, data: &PresenceDraft) -> RemoteResult<Presence> {
        (**self).update_presence(id, data)
    }
    fn delete_presence(&self, id: &str) -> RemoteResult<()> {
        (**self).delete_presence(id)
    }
}
