//! board-runner: headless board printer for the dispatch dashboard core.
//!
//! Usage:
//!   board-runner --date 2024-03-04 --data-dir ./data
//!
//! Seeds a small demo roster, prints the daily board and the weekly
//! distribution table, and round-trips the temporary roster file.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use dispatch_core::{
    model::{Case, CaseStatus, Priority},
    roster::RosterStore,
    store::{DispatchStore, NewCase, NewEngineer, NewSilo},
    weekly::{week_dates, week_monday},
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let date = args
        .windows(2)
        .find(|w| w[0] == "--date")
        .map(|w| w[1].parse::<NaiveDate>())
        .transpose()?
        .unwrap_or_else(|| Utc::now().date_naive());
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    let mut store = DispatchStore::new();
    seed_demo(&mut store, date);

    print_daily_board(&store, date);
    print_weekly_table(&store, date);

    std::fs::create_dir_all(data_dir)?;
    let mut roster = RosterStore::open(Path::new(data_dir))?;
    if roster.entries().is_empty() {
        if let Some(engineer) = store.engineers().first() {
            roster.add(&engineer.id, date, "08:00", "16:30");
        }
    }
    println!("\nTemporary roster ({} entries):", roster.entries().len());
    for entry in roster.entries_for_week(week_monday(date)) {
        let name = store
            .engineer(&entry.engineer_id)
            .map(|e| e.name.as_str())
            .unwrap_or("Unknown");
        println!("  {} {} {}-{}", entry.date, name, entry.start_time, entry.end_time);
    }

    Ok(())
}

fn seed_demo(store: &mut DispatchStore, date: NaiveDate) {
    let integration = store.add_silo(NewSilo {
        name: "Integration".into(),
        description: "Integration framework and adapters".into(),
    });
    let integration_id = integration.id.clone();
    let reports = store.add_silo(NewSilo {
        name: "Reports".into(),
        description: "Reporting stack".into(),
    });
    let reports_id = reports.id.clone();

    let ada = store
        .add_engineer(NewEngineer {
            name: "Ada Lovelace".into(),
            silo_ids: vec![integration_id.clone()],
            is_active: true,
            ..Default::default()
        })
        .id
        .clone();
    let grace = store
        .add_engineer(NewEngineer {
            name: "Grace Hopper".into(),
            silo_ids: vec![integration_id, reports_id.clone()],
            is_active: true,
            ..Default::default()
        })
        .id
        .clone();

    store.add_silo_label(&grace, &reports_id, "primary on-call");

    for (number, priority, assignee) in [
        ("TS001234567", Priority::Critical, Some(ada.clone())),
        ("TS001234568", Priority::Medium, Some(ada)),
        ("TS001234569", Priority::High, Some(grace)),
        ("TS001234570", Priority::Low, None),
    ] {
        let new_case = NewCase {
            case_number: number.into(),
            customer: "Acme Corp".into(),
            priority: Some(priority),
            status: Some(CaseStatus::New),
            assigned_to: assignee,
            date_assigned: Some(date),
            ..Default::default()
        };
        if let Err(err) = new_case.validate() {
            log::warn!("skipping invalid demo case {number}: {err}");
            continue;
        }
        store.add_case(new_case);
    }
}

fn print_daily_board(store: &DispatchStore, date: NaiveDate) {
    let board = store.daily_cases(date);
    println!("Daily board for {date}");
    for engineer in store.active_engineers() {
        let total = store.displayed_total(date, &engineer.id);
        println!("  {} ({total} cases)", engineer.name);
        for case in board.critical_cases(&engineer.id) {
            print_case(case);
        }
        for case in board.normal_cases(&engineer.id) {
            print_case(case);
        }
    }
    println!("  Unassigned");
    for case in board.unassigned() {
        print_case(case);
    }
}

fn print_case(case: &Case) {
    println!(
        "    [SEV {}] {} — {}",
        case.priority.severity(),
        case.case_number,
        case.customer
    );
}

fn print_weekly_table(store: &DispatchStore, date: NaiveDate) {
    let monday = week_monday(date);
    let weekly = store.week_distribution(monday);
    println!("\nWeekly distribution, week of {monday}");
    for engineer in store.active_engineers() {
        let per_day: Vec<String> = week_dates(monday)
            .iter()
            .map(|d| weekly.cases_for(&engineer.id, *d).len().to_string())
            .collect();
        let total = weekly.engineer_totals.get(&engineer.id).copied().unwrap_or(0);
        println!("  {:<16} {}  total {total}", engineer.name, per_day.join(" "));
    }
    let day_totals: Vec<String> = weekly.daily_totals.values().map(|v| v.to_string()).collect();
    println!("  {:<16} {}  total {}", "Daily total", day_totals.join(" "), weekly.grand_total);
}
