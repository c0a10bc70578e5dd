//! reqwest-backed gateway for the `tables/personnes` / `tables/presences` API.

use super::wire::{ListEnvelope, PersonBody, PresenceBody, WirePerson, WirePresence};
use super::{PresenceDraft, RemoteGateway, RemoteResult};
use crate::errors::RemoteFailure;
use crate::models::{Person, PersonDraft, Presence};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const PEOPLE: &str = "tables/personnes";
const PRESENCES: &str = "tables/presences";

pub struct HttpGateway {
    client: Client,
    base_url: String,
    people_limit: u32,
    presences_limit: u32,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout: Duration) -> RemoteResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            people_limit: 1000,
            presences_limit: 10_000,
        })
    }

    pub fn with_limits(mut self, people: u32, presences: u32) -> Self {
        self.people_limit = people;
        self.presences_limit = presences;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn send(&self, req: RequestBuilder) -> RemoteResult<Response> {
        let resp = req.send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RemoteFailure::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }
        Ok(resp)
    }

    fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> RemoteResult<T> {
        let resp = self.send(req)?;
        resp.json::<T>()
            .map_err(|e| RemoteFailure::Decode(e.to_string()))
    }

    fn list<T: DeserializeOwned>(&self, table: &str, limit: u32) -> RemoteResult<Vec<T>> {
        let req = self
            .client
            .get(self.url(table))
            .query(&[("limit", limit)]);
        let envelope: ListEnvelope<T> = self.fetch(req)?;
        Ok(envelope.data)
    }

    fn delete(&self, table: &str, id: &str) -> RemoteResult<()> {
        log::debug!("DELETE {table}/{id}");
        self.send(self.client.delete(self.url(&format!("{table}/{id}"))))?;
        Ok(())
    }
}

impl RemoteGateway for HttpGateway {
    fn list_people(&self) -> RemoteResult<Vec<Person>> {
        let rows: Vec<WirePerson> = self.list(PEOPLE, self.people_limit)?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    fn create_person(&self, data: &PersonDraft) -> RemoteResult<Person> {
        log::debug!("POST {PEOPLE}");
        let req = self.client.post(self.url(PEOPLE)).json(&PersonBody::from(data));
        let created: WirePerson = self.fetch(req)?;
        Ok(created.into())
    }

    fn update_person(&self, id: &str, data: &PersonDraft) -> RemoteResult<Person> {
        log::debug!("PUT {PEOPLE}/{id}");
        let req = self
            .client
            .put(self.url(&format!("{PEOPLE}/{id}")))
            .json(&PersonBody::from(data));
        let updated: WirePerson = self.fetch(req)?;
        Ok(updated.into())
    }

    fn delete_person(&self, id: &str) -> RemoteResult<()> {
        self.delete(PEOPLE, id)
    }

    fn list_presences(&self) -> RemoteResult<Vec<Presence>> {
        let rows: Vec<WirePresence> = self.list(PRESENCES, self.presences_limit)?;
        Ok(rows.into_iter().map(Presence::from).collect())
    }

    fn create_presence(&self, data: &PresenceDraft) -> RemoteResult<Presence> {
        log::debug!("POST {PRESENCES}");
        let req = self
            .client
            .post(self.url(PRESENCES))
            .json(&PresenceBody::from(data));
        let created: WirePresence = self.fetch(req)?;
        Ok(created.into())
    }

    fn update_presence(&self, id: &str, data: &PresenceDraft) -> RemoteResult<Presence> {
        log::debug!("PUT {PRESENCES}/{id}");
        let req = self
            .client
            .put(self.url(&format!("{PRESENCES}/{id}")))
            .json(&PresenceBody::from(data));
        let updated: WirePresence = self.fetch(req)?;
        Ok(updated.into())
    }

    fn delete_presence(&self, id: &str) -> RemoteResult<()> {
        self.delete(PRESENCES, id)
    }
}
