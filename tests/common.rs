#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rpresence::errors::RemoteFailure;
use rpresence::models::{Person, PersonDraft, Presence, RecordId};
use rpresence::remote::{PresenceDraft, RemoteGateway, RemoteResult};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpr() -> Command {
    cargo_bin_cmd!("rpresence")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpresence.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Offline CLI invocation against `db_path`
pub fn rpr_offline(db_path: &str) -> Command {
    let mut cmd = rpr();
    cmd.args(["--db", db_path, "--offline", "--test"]);
    cmd
}

/// Initialize the mirror and add one person, returning their id.
pub fn init_db_with_person(db_path: &str) -> String {
    rpr_offline(db_path).arg("init").assert().success();

    let out = rpr_offline(db_path)
        .args(["add", "--nom", "Dupont", "--prenom", "Jean"])
        .output()
        .expect("run add");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let start = stdout.find("(id ").expect("id in output") + 4;
    let end = stdout[start..].find(')').expect("closing paren") + start;
    stdout[start..end].to_string()
}

/// In-memory stand-in for the roster API.
///
/// Ids are issued as `srv-<n>`. `set_failing(true)` makes every call fail
/// like an unreachable server; `fail_on(name)` fails one method only.
#[derive(Default)]
pub struct FakeGateway {
    pub people: RefCell<Vec<Person>>,
    pub presences: RefCell<Vec<Presence>>,
    pub calls: RefCell<Vec<String>>,
    next: Cell<u32>,
    failing: Cell<bool>,
    failing_calls: RefCell<HashSet<String>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let gw = Self::default();
        gw.set_failing(true);
        gw
    }

    pub fn set_failing(&self, on: bool) {
        self.failing.set(on);
    }

    pub fn fail_on(&self, method: &str) {
        self.failing_calls.borrow_mut().insert(method.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn seed_person(&self, id: &str, nom: &str, prenom: &str) -> Person {
        let person = Person::from_draft(RecordId::remote(id), PersonDraft::new(nom, prenom));
        self.people.borrow_mut().push(person.clone());
        person
    }

    fn call(&self, name: &str) -> RemoteResult<()> {
        self.calls.borrow_mut().push(name.to_string());
        if self.failing.get() || self.failing_calls.borrow().contains(name) {
            Err(RemoteFailure::Network("connection refused".into()))
        } else {
            Ok(())
        }
    }

    fn issue(&self) -> String {
        self.next.set(self.next.get() + 1);
        format!("srv-{}", self.next.get())
    }

    fn not_found(id: &str) -> RemoteFailure {
        RemoteFailure::Status {
            status: 404,
            url: id.to_string(),
        }
    }

    fn to_presence(id: String, data: &PresenceDraft) -> Presence {
        Presence::new(
            RecordId::remote(id),
            RecordId::remote(data.personne_id.clone()),
            data.date,
            data.statut,
            data.notes.clone(),
        )
    }
}

impl RemoteGateway for FakeGateway {
    fn list_people(&self) -> RemoteResult<Vec<Person>> {
        self.call("list_people")?;
        Ok(self.people.borrow().clone())
    }

    fn create_person(&self, data: &PersonDraft) -> RemoteResult<Person> {
        self.call("create_person")?;
        let person = Person::from_draft(RecordId::remote(self.issue()), data.clone());
        self.people.borrow_mut().push(person.clone());
        Ok(person)
    }

    fn update_person(&self, id: &str, data: &PersonDraft) -> RemoteResult<Person> {
        self.call("update_person")?;
        let mut people = self.people.borrow_mut();
        let slot = people
            .iter_mut()
            .find(|p| p.id.value == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = Person::from_draft(slot.id.clone(), data.clone());
        Ok(slot.clone())
    }

    fn delete_person(&self, id: &str) -> RemoteResult<()> {
        self.call("delete_person")?;
        self.people.borrow_mut().retain(|p| p.id.value != id);
        Ok(())
    }

    fn list_presences(&self) -> RemoteResult<Vec<Presence>> {
        self.call("list_presences")?;
        Ok(self.presences.borrow().clone())
    }

    fn create_presence(&self, data: &PresenceDraft) -> RemoteResult<Presence> {
        self.call("create_presence")?;
        let presence = Self::to_presence(self.issue(), data);
        self.presences.borrow_mut().push(presence.clone());
        Ok(presence)
    }

    fn update_presence(&self, id: &str, data: &PresenceDraft) -> RemoteResult<Presence> {
        self.call("update_presence")?;
        let mut presences = self.presences.borrow_mut();
        let slot = presences
            .iter_mut()
            .find(|p| p.id.value == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = Self::to_presence(id.to_string(), data);
        Ok(slot.clone())
    }

    fn delete_presence(&self, id: &str) -> RemoteResult<()> {
        self.call("delete_presence")?;
        self.presences.borrow_mut().retain(|p| p.id.value != id);
        Ok(())
    }
}
