use super::domain::{AccessDecisionClass, VehicleRecord};
use serde::Serialize;

/// Per-decision tallies for the gate dashboard.
///
/// `permitted + denied + pending == total` holds whenever every record carries a decision
/// class; unclassified records only count toward `total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub total: usize,
    pub permitted: usize,
    pub denied: usize,
    pub pending: usize,
}

impl CategoryCounts {
    pub const fn get(&self, class: AccessDecisionClass) -> usize {
        match class {
            AccessDecisionClass::Permitted => self.permitted,
            AccessDecisionClass::Denied => self.denied,
            AccessDecisionClass::Pending => self.pending,
        }
    }

    /// Records counted in `total` but in none of the decision buckets.
    pub fn unclassified(&self) -> usize {
        self.total
            .saturating_sub(self.permitted + self.denied + self.pending)
    }
}

pub fn compute_counts<'a, I>(records: I) -> CategoryCounts
where
    I: IntoIterator<Item = &'a VehicleRecord>,
{
    let mut counts = CategoryCounts::default();
    for record in records {
        counts.total += 1;
        match record.decision_class {
            Some(AccessDecisionClass::Permitted) => counts.permitted += 1,
            Some(AccessDecisionClass::Denied) => counts.denied += 1,
            Some(AccessDecisionClass::Pending) => counts.pending += 1,
            None => {}
        }
    }
    counts
}

/// Fill colors used by the access distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    pub permitted: &'static str,
    pub denied: &'static str,
    pub pending: &'static str,
}

impl ChartPalette {
    pub const GATE: Self = Self {
        permitted: "#22c55e",
        denied: "#ef4444",
        pending: "#eab308",
    };

    pub const fn color(&self, class: AccessDecisionClass) -> &'static str {
        match class {
            AccessDecisionClass::Permitted => self.permitted,
            AccessDecisionClass::Denied => self.denied,
            AccessDecisionClass::Pending => self.pending,
        }
    }
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self::GATE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub class: AccessDecisionClass,
    pub label: &'static str,
    pub value: usize,
    pub color: &'static str,
}

/// Chart breakdown in fixed Permitted, Denied, Pending order, zero slices included.
pub fn build_chart_series(counts: &CategoryCounts) -> [ChartSlice; 3] {
    build_chart_series_with(counts, &ChartPalette::GATE)
}

pub fn build_chart_series_with(
    counts: &CategoryCounts,
    palette: &ChartPalette,
) -> [ChartSlice; 3] {
    AccessDecisionClass::ordered().map(|class| ChartSlice {
        class,
        label: class.label(),
        value: counts.get(class),
        color: palette.color(class),
    })
}
