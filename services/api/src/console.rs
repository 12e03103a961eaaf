use crate::infra::{load_roster, parse_status, RosterSource};
use chrono::Local;
use clap::Args;
use gate_access::config::AppConfig;
use gate_access::error::AppError;
use gate_access::roster::{
    DashboardView, QueryState, Roster, SearchResultsView, StatusFilter, VehicleDetailView,
    VehicleId,
};
use serde::Serialize;
use std::fmt::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Registration number, driver name, or company fragment (case-insensitive)
    #[arg(default_value = "")]
    pub(crate) query: String,
    #[arg(
        long,
        value_parser = parse_status,
        default_value = "ALL",
        help = format!("Access decision filter: {}", StatusFilter::accepted_labels())
    )]
    pub(crate) status: StatusFilter,
    /// Roster file (CSV or JSON); defaults to GATE_ROSTER_PATH or the built-in sample
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Print the results as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Vehicle id as listed by `search`
    pub(crate) id: String,
    /// Roster file (CSV or JSON); defaults to GATE_ROSTER_PATH or the built-in sample
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Print the record as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StatsArgs {
    /// Roster file (CSV or JSON); defaults to GATE_ROSTER_PATH or the built-in sample
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Print the dashboard as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        query,
        status,
        roster,
        json,
    } = args;

    let (roster, source) = resolve_roster(roster)?;
    let results = roster.search(&QueryState::new(query, status));

    if json {
        print_json(&results);
    } else {
        print_rendered(|out| render_search_results(out, &results, source, roster.len()));
    }
    Ok(())
}

pub(crate) fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let ShowArgs { id, roster, json } = args;

    let (roster, _) = resolve_roster(roster)?;
    let detail = roster.detail(&VehicleId(id))?;

    if json {
        print_json(&detail);
    } else {
        print_rendered(|out| render_vehicle_detail(out, &detail));
    }
    Ok(())
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), AppError> {
    let StatsArgs { roster, json } = args;

    let (roster, source) = resolve_roster(roster)?;
    let dashboard = roster.dashboard();

    if json {
        print_json(&dashboard);
    } else {
        let generated = Local::now().format("%Y-%m-%d %H:%M").to_string();
        print_rendered(|out| render_dashboard(out, &dashboard, source, &generated));
    }
    Ok(())
}

fn resolve_roster(path: Option<PathBuf>) -> Result<(Roster, RosterSource), AppError> {
    let path = match path {
        Some(path) => Some(path),
        None => AppConfig::load()?.roster.path,
    };
    load_roster(path)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("JSON output unavailable: {err}"),
    }
}

fn print_rendered(render: impl FnOnce(&mut String) -> fmt::Result) {
    let mut out = String::new();
    match render(&mut out) {
        Ok(()) => print!("{out}"),
        Err(err) => println!("report output unavailable: {err}"),
    }
}

pub(crate) fn render_search_results(
    out: &mut impl Write,
    results: &SearchResultsView,
    source: RosterSource,
    roster_size: usize,
) -> fmt::Result {
    writeln!(out, "Vehicle access search")?;
    writeln!(out, "Roster: {} ({} vehicles)", source.label(), roster_size)?;
    if results.query.is_empty() {
        writeln!(out, "Filter: {}", results.status_label)?;
    } else {
        writeln!(
            out,
            "Filter: {} | Query: \"{}\"",
            results.status_label, results.query
        )?;
    }

    if results.vehicles.is_empty() {
        writeln!(out, "\nNo vehicles found")?;
        writeln!(
            out,
            "Clear filters by searching with an empty query and --status ALL"
        )?;
        return Ok(());
    }

    writeln!(out, "\n{} Vehicles Found", results.found)?;
    for vehicle in &results.vehicles {
        writeln!(
            out,
            "- [{}] {} ({}) | {} | {} | {}",
            vehicle.id,
            vehicle.registration_number,
            vehicle.category,
            vehicle.driver_name,
            vehicle.company_name,
            vehicle.decision_label
        )?;
    }
    Ok(())
}

pub(crate) fn render_vehicle_detail(
    out: &mut impl Write,
    detail: &VehicleDetailView,
) -> fmt::Result {
    writeln!(out, "Vehicle details")?;
    writeln!(out, "{} ({})", detail.registration_number, detail.category)?;
    writeln!(out, "Decision: {}", detail.decision_label)?;
    writeln!(out, "\n- Driver Name: {}", detail.driver_name)?;
    writeln!(out, "- Company: {}", detail.company_name)?;
    writeln!(out, "- Purpose: {}", detail.purpose)?;
    writeln!(out, "- Room No: {}", detail.room_number)?;
    match &detail.contact_link {
        Some(link) => writeln!(out, "- Contact: {} <{}>", detail.contact_number, link)?,
        None => writeln!(out, "- Contact: {}", detail.contact_number)?,
    }
    writeln!(out, "- Gate Pass: {}", detail.gate_pass_label)
}

pub(crate) fn render_dashboard(
    out: &mut impl Write,
    dashboard: &DashboardView,
    source: RosterSource,
    generated: &str,
) -> fmt::Result {
    writeln!(out, "Gate access dashboard")?;
    writeln!(out, "Roster: {} (generated {})", source.label(), generated)?;

    writeln!(out, "\nTotal Vehicles: {}", dashboard.counts.total)?;
    writeln!(out, "Allowed: {}", dashboard.counts.permitted)?;
    writeln!(out, "Denied: {}", dashboard.counts.denied)?;
    writeln!(out, "Pending: {}", dashboard.counts.pending)?;
    if dashboard.unclassified > 0 {
        writeln!(out, "Unclassified: {}", dashboard.unclassified)?;
    }

    writeln!(out, "\nAccess distribution")?;
    for slice in &dashboard.chart {
        let share = if dashboard.counts.total > 0 {
            slice.value as f32 / dashboard.counts.total as f32 * 100.0
        } else {
            0.0
        };
        writeln!(
            out,
            "- {}: {} ({:.0}%) {}",
            slice.label, slice.value, share, slice.color
        )?;
    }
    Ok(())
}
