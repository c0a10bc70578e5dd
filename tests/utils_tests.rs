use chrono::NaiveDate;
use rpresence::config::Config;
use rpresence::utils::date::{resolve_date, shift, today};
use rpresence::utils::table::{Table, display_width};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_resolve_date_keywords_and_iso() {
    assert_eq!(resolve_date(None).unwrap(), today());
    assert_eq!(resolve_date(Some("yesterday")).unwrap(), shift(today(), -1));
    assert_eq!(
        resolve_date(Some("2026-02-28")).unwrap(),
        NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
    );
    assert!(resolve_date(Some("28/02/2026")).is_err());
}

#[test]
fn test_table_aligns_accented_headers() {
    let mut table = Table::new(["Prénom", "Statut"]);
    table.add_row(vec!["Jean".into(), "\x1b[32mPrésent\x1b[0m".into()]);
    assert_eq!(table.len(), 1);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(display_width(lines[1]), display_width(lines[2]));
    assert!(lines[0].starts_with("Prénom │ Statut"));
    assert_eq!(display_width("Prénom"), 6);
}

#[test]
fn test_config_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("none.conf")).unwrap();
    assert_eq!(cfg.timeout_secs, 10);
    assert_eq!(cfg.people_limit, 1000);
    assert!(cfg.is_offline());
}

#[test]
fn test_config_partial_yaml_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rpresence.conf");
    fs::write(&path, "api_url: http://localhost:8080/api\ntimeout_secs: 3\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.api_url.as_deref(), Some("http://localhost:8080/api"));
    assert_eq!(cfg.timeout_secs, 3);
    assert_eq!(cfg.presences_limit, 10_000);
    assert_eq!(cfg.default_avatar_color, "#4F46E5");
    assert!(!cfg.is_offline());

    let forced = Config {
        offline: true,
        ..cfg.clone()
    };
    assert!(forced.is_offline());
}

#[test]
fn test_config_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("rpresence.conf");
    let cfg = Config {
        database: "/tmp/roster.sqlite".into(),
        api_url: Some("https://example.org".into()),
        ..Config::default()
    };

    cfg.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), cfg);
}
