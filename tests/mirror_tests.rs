use chrono::NaiveDate;
use rpresence::core::mirror::{LocalMirror, PEOPLE_KEY};
use rpresence::core::store::RecordStore;
use rpresence::models::{Person, PersonDraft, Presence, RecordId, Status};
use tempfile::tempdir;

fn sample_store() -> RecordStore {
    let jean = RecordId::local("local-1");
    let marie = RecordId::remote("12");
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    let people = vec![
        Person::from_draft(
            jean.clone(),
            PersonDraft::new("Dupont", "Jean").with_email("jean@example.com"),
        ),
        Person::from_draft(marie.clone(), PersonDraft::new("Curie", "Marie").with_poste("Chimie")),
    ];
    let presences = vec![
        Presence::new(RecordId::local("local-pres-2"), jean, date, Status::Retard, "bus, 10 min"),
        Presence::new(RecordId::remote("99"), marie, date, Status::Present, ""),
    ];
    RecordStore::from_parts(people, presences)
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mirror.sqlite");
    let path = path.to_str().unwrap();

    let store = sample_store();
    {
        let mut mirror = LocalMirror::open(path).unwrap();
        mirror.save(&store).unwrap();
    }

    let reopened = LocalMirror::open(path).unwrap();
    let loaded = reopened.load();
    assert_eq!(loaded, store);
    assert!(reopened.last_saved().unwrap().is_some());
}

#[test]
fn test_empty_mirror_loads_empty_store() {
    let mirror = LocalMirror::in_memory().unwrap();
    assert!(mirror.load().is_empty());
    assert_eq!(mirror.last_saved().unwrap(), None);
}

#[test]
fn test_corrupt_entry_loads_as_empty() {
    let mut mirror = LocalMirror::in_memory().unwrap();
    mirror.save(&sample_store()).unwrap();

    mirror
        .pool()
        .conn
        .execute(
            "UPDATE mirror SET value = '{not json' WHERE key = ?1",
            [PEOPLE_KEY],
        )
        .unwrap();

    let loaded = mirror.load();
    assert!(loaded.people().is_empty());
    // the other key is still readable
    assert_eq!(loaded.presences().len(), 2);
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let mut mirror = LocalMirror::in_memory().unwrap();
    mirror.save(&sample_store()).unwrap();
    mirror.save(&RecordStore::new()).unwrap();

    assert!(mirror.load().is_empty());
}

#[test]
fn test_open_or_memory_survives_unusable_path() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "plain file").unwrap();
    let path = blocker.join("mirror.sqlite");

    let mirror = LocalMirror::open_or_memory(path.to_str().unwrap()).unwrap();
    assert_eq!(mirror.path(), ":memory:");
}

#[test]
fn test_schema_migration_is_recorded_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.sqlite");
    let path = path.to_str().unwrap();

    let count_applied = |mirror: &mut LocalMirror| -> i64 {
        mirror
            .pool()
            .conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |row| row.get(0),
            )
            .unwrap()
    };

    let mut mirror = LocalMirror::open(path).unwrap();
    mirror.save(&sample_store()).unwrap();
    assert_eq!(count_applied(&mut mirror), 1);
    drop(mirror);

    let mut mirror = LocalMirror::open(path).unwrap();
    assert_eq!(count_applied(&mut mirror), 1);
    assert_eq!(mirror.load(), sample_store());
}
