use chrono::NaiveDate;
use rpresence::core::store::RecordStore;
use rpresence::export::csv::render_daily_csv;
use rpresence::export::{ExportFormat, ExportLogic, daily_rows};
use rpresence::models::{Person, PersonDraft, Presence, RecordId, Status};
use std::fs;
use tempfile::tempdir;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn one_person() -> (RecordStore, RecordId) {
    let id = RecordId::local("local-1");
    let mut store = RecordStore::new();
    store.upsert_person(Person::from_draft(id.clone(), PersonDraft::new("Dupont", "Jean")));
    (store, id)
}

#[test]
fn test_unmarked_person_row() {
    let (store, _) = one_person();
    let csv = render_daily_csv(&daily_rows(&store, day())).unwrap();

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Prénom,Nom,Email,Poste,Statut,Notes"));
    let row = lines.next().unwrap();
    assert_eq!(row, "Jean,Dupont,,,non marqué,\"\"");
    assert!(row.ends_with(",non marqué,\"\""));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_marked_row_quotes_notes_and_strips_commas() {
    let (mut store, id) = one_person();
    store.upsert_presence(Presence::new(
        RecordId::local("local-pres-1"),
        id,
        day(),
        Status::Retard,
        "train, \"grève\"",
    ));

    let csv = render_daily_csv(&daily_rows(&store, day())).unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert_eq!(row, "Jean,Dupont,,,retard,\"train; \"\"grève\"\"\"");
}

#[test]
fn test_fields_with_commas_do_not_shift_columns() {
    let mut store = RecordStore::new();
    store.upsert_person(Person::from_draft(
        RecordId::remote("3"),
        PersonDraft::new("Martin", "Paul").with_poste("Achats, logistique"),
    ));

    let csv = render_daily_csv(&daily_rows(&store, day())).unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert_eq!(row.matches(',').count(), 5);
    assert!(row.contains("Achats; logistique"));
}

#[test]
fn test_empty_roster_exports_header_only() {
    let csv = render_daily_csv(&daily_rows(&RecordStore::new(), day())).unwrap();
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn test_export_to_file_and_refuse_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("roster.csv");
    let out_str = out.to_str().unwrap();
    let (store, _) = one_person();

    let written = ExportLogic::export(&store, day(), ExportFormat::Csv, Some(out_str), false).unwrap();
    assert_eq!(written, out);
    assert!(fs::read_to_string(&out).unwrap().contains("Dupont"));

    // forced overwrite with the JSON variant of the same rows
    ExportLogic::export(&store, day(), ExportFormat::Json, Some(out_str), true).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json[0]["statut"], "non marqué");
    assert_eq!(json[0]["nom"], "Dupont");
}

#[test]
fn test_default_file_name() {
    assert_eq!(
        ExportLogic::default_file_name(day(), ExportFormat::Csv),
        "presences_2026-10-19.csv"
    );
    assert_eq!(
        ExportLogic::default_file_name(day(), ExportFormat::Json),
        "presences_2026-10-19.json"
    );
}
