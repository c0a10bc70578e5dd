use chrono::NaiveDate;
use rpresence::core::query::{daily_stats, visible_people};
use rpresence::core::store::RecordStore;
use rpresence::models::{FilterMode, Person, PersonDraft, Presence, RecordId, Status};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Five people: present, late, absent, on leave, unmarked.
fn roster() -> RecordStore {
    let rows = [
        ("1", "Dupont", "Jean", "Développeur", Some(Status::Present)),
        ("2", "Curie", "Marie", "Chimiste", Some(Status::Retard)),
        ("3", "Martin", "Paul", "Comptable", Some(Status::Absent)),
        ("4", "Bernard", "Lucie", "RH", Some(Status::Conge)),
        ("5", "Petit", "Hugo", "", None),
    ];

    let mut store = RecordStore::new();
    for (id, nom, prenom, poste, statut) in rows {
        let pid = RecordId::local(format!("local-{id}"));
        store.upsert_person(Person::from_draft(
            pid.clone(),
            PersonDraft::new(nom, prenom)
                .with_poste(poste)
                .with_email(format!("{}@corp.fr", prenom.to_lowercase())),
        ));
        if let Some(statut) = statut {
            store.upsert_presence(Presence::new(
                RecordId::local(format!("local-pres-{id}")),
                pid,
                day(),
                statut,
                "",
            ));
        }
    }
    store
}

fn names(people: &[&Person]) -> Vec<String> {
    people.iter().map(|p| p.prenom.clone()).collect()
}

#[test]
fn test_filter_all_keeps_roster_order() {
    let store = roster();
    let all = visible_people(&store, day(), FilterMode::All, "");
    assert_eq!(names(&all), ["Jean", "Marie", "Paul", "Lucie", "Hugo"]);
}

#[test]
fn test_filter_present_includes_late() {
    let store = roster();
    let present = visible_people(&store, day(), FilterMode::Present, "");
    assert_eq!(names(&present), ["Jean", "Marie"]);
}

#[test]
fn test_filter_absent_includes_leave_and_unmarked() {
    let store = roster();
    let absent = visible_people(&store, day(), FilterMode::Absent, "");
    assert_eq!(names(&absent), ["Paul", "Lucie", "Hugo"]);
}

#[test]
fn test_search_is_case_insensitive_over_all_text_fields() {
    let store = roster();

    let by_name = visible_people(&store, day(), FilterMode::All, "JEAN");
    assert_eq!(names(&by_name), ["Jean"]);

    let by_role = visible_people(&store, day(), FilterMode::All, "chimiste");
    assert_eq!(names(&by_role), ["Marie"]);

    let by_email = visible_people(&store, day(), FilterMode::All, "hugo@corp");
    assert_eq!(names(&by_email), ["Hugo"]);

    assert!(visible_people(&store, day(), FilterMode::All, "zzz").is_empty());
}

#[test]
fn test_search_combines_with_filter() {
    let store = roster();
    let res = visible_people(&store, day(), FilterMode::Present, "paul");
    assert!(res.is_empty());
}

#[test]
fn test_daily_stats_counts() {
    let store = roster();
    let stats = daily_stats(&store, day());
    assert_eq!(stats.total, 5);
    assert_eq!(stats.present, 2);
    assert_eq!(stats.absent, 3);
    assert_eq!(stats.rate, 40);
}

#[test]
fn test_daily_stats_other_day_is_all_absent() {
    let store = roster();
    let other = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
    let stats = daily_stats(&store, other);
    assert_eq!((stats.present, stats.absent, stats.rate), (0, 5, 0));
}

#[test]
fn test_daily_stats_empty_roster() {
    let stats = daily_stats(&RecordStore::new(), day());
    assert_eq!((stats.total, stats.present, stats.absent, stats.rate), (0, 0, 0, 0));
}

#[test]
fn test_daily_stats_rate_rounds() {
    let mut store = RecordStore::new();
    for i in 0..3 {
        let id = RecordId::local(format!("local-{i}"));
        store.upsert_person(Person::from_draft(id.clone(), PersonDraft::new("N", "P")));
        if i < 2 {
            store.upsert_presence(Presence::new(
                RecordId::local(format!("local-pres-{i}")),
                id,
                day(),
                Status::Present,
                "",
            ));
        }
    }

    let stats = daily_stats(&store, day());
    assert_eq!(stats.rate, 67);
    assert_eq!(stats.present + stats.absent, stats.total);
}
