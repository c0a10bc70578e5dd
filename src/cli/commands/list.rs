use super::session;
use super::stats::print_stats;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::{daily_stats, presence_for, visible_people};
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::models::presence::UNMARKED_LABEL;
use crate::models::{FilterMode, Person};
use crate::utils::colors::{GREY, RESET, color_for_status, colorize_optional, paint};
use crate::utils::date::resolve_date;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date,
        filter,
        search,
        table,
    } = cmd
    {
        let day = resolve_date(date.as_deref())?;
        let session = session(cfg)?;
        let store = session.store();

        print_stats(&day, &daily_stats(store, day));

        if store.people().is_empty() {
            println!("No people in the roster yet. Add one with `rpresence add --nom .. --prenom ..`.");
            return Ok(());
        }

        let people = visible_people(store, day, *filter, search.as_deref().unwrap_or(""));
        println!("{}\n", count_badge(people.len(), *filter));

        if *table {
            print_table(store, &people, day);
        } else {
            for person in &people {
                print_card(store, person, day);
            }
        }
    }

    Ok(())
}

fn count_badge(n: usize, filter: FilterMode) -> String {
    let plural = if n > 1 { "s" } else { "" };
    match filter {
        FilterMode::All => format!("{n} personne{plural}"),
        other => format!("{n} personne{plural} ({})", other.as_str()),
    }
}

fn status_text(store: &RecordStore, person: &Person, day: NaiveDate) -> String {
    let statut = presence_for(store, person, day).map(|p| p.statut);
    let label = statut.map(|s| s.label()).unwrap_or(UNMARKED_LABEL);
    paint(label, color_for_status(statut))
}

fn print_card(store: &RecordStore, person: &Person, day: NaiveDate) {
    println!(
        "[{}] {}  {}{}{}",
        person.initials(),
        person.full_name(),
        GREY,
        person.id,
        RESET
    );
    if !person.poste.is_empty() {
        println!("     {}", person.poste);
    }
    if !person.email.is_empty() {
        println!("     ✉ {}", person.email);
    }

    let notes = presence_for(store, person, day)
        .map(|p| p.notes.as_str())
        .filter(|n| !n.is_empty());
    match notes {
        Some(n) => println!("     {} · {}", status_text(store, person, day), n),
        None => println!("     {}", status_text(store, person, day)),
    }
    println!();
}

fn print_table(store: &RecordStore, people: &[&Person], day: NaiveDate) {
    let mut table = Table::new(["Id", "Nom", "Prénom", "Email", "Poste", "Statut", "Notes"]);

    for person in people {
        let notes = presence_for(store, person, day)
            .map(|p| p.notes.clone())
            .unwrap_or_default();
        table.add_row(vec![
            person.id.to_string(),
            person.nom.clone(),
            person.prenom.clone(),
            colorize_optional(&person.email),
            colorize_optional(&person.poste),
            status_text(store, person, day),
            notes,
        ]);
    }

    print!("{}", table.render());
}
