//! Read-only views over the record store: filtered list and daily stats.

use crate::core::store::RecordStore;
use crate::models::{DailyStats, FilterMode, Person, Presence};
use chrono::NaiveDate;

/// Presence of `person` on `date`, if marked.
pub fn presence_for<'a>(store: &'a RecordStore, person: &Person, date: NaiveDate) -> Option<&'a Presence> {
    store.find_presence(&person.id, date)
}

fn is_present(store: &RecordStore, person: &Person, date: NaiveDate) -> bool {
    presence_for(store, person, date).is_some_and(|p| p.statut.counts_as_present())
}

fn matches_search(person: &Person, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {} {}",
        person.prenom, person.nom, person.email, person.poste
    )
    .to_lowercase();
    haystack.contains(needle)
}

/// People to show for `date`, in roster order.
///
/// `search` is a case-insensitive substring over first name, last name,
/// email and role. `Absent` keeps everyone who is not present or late,
/// including people on leave and people not marked at all.
pub fn visible_people<'a>(
    store: &'a RecordStore,
    date: NaiveDate,
    filter: FilterMode,
    search: &str,
) -> Vec<&'a Person> {
    let needle = search.trim().to_lowercase();

    store
        .people()
        .iter()
        .filter(|person| matches_search(person, &needle))
        .filter(|person| match filter {
            FilterMode::All => true,
            FilterMode::Present => is_present(store, person, date),
            FilterMode::Absent => !is_present(store, person, date),
        })
        .collect()
}

pub fn daily_stats(store: &RecordStore, date: NaiveDate) -> DailyStats {
    let total = store.people().len();
    let present = store
        .people()
        .iter()
        .filter(|person| is_present(store, person, date))
        .count();

    let rate = if total == 0 {
        0
    } else {
        ((present as f64 / total as f64) * 100.0).round() as u32
    };

    DailyStats {
        total,
        present,
        absent: total - present,
        rate,
    }
}
