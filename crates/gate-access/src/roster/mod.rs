//! Gate roster lookup: search filtering, decision aggregation, and the views built on them.

mod catalog;
pub mod domain;
pub mod filter;
pub mod import;
pub mod router;
pub mod summary;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{Roster, RosterLookupError};
pub use domain::{
    AccessDecisionClass, AccessDecisionLabel, QueryState, StatusFilter, VehicleCategory,
    VehicleId, VehicleRecord,
};
pub use filter::{filter_vehicles, matches};
pub use import::{RosterImportError, RosterImporter};
pub use router::roster_router;
pub use summary::{
    build_chart_series, build_chart_series_with, compute_counts, CategoryCounts, ChartPalette,
    ChartSlice,
};
pub use views::{DashboardView, SearchResultsView, VehicleCardView, VehicleDetailView};
