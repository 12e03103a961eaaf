use super::domain::{
    AccessDecisionClass, AccessDecisionLabel, QueryState, StatusFilter, VehicleCategory,
    VehicleId, VehicleRecord,
};
use super::filter::filter_vehicles;
use super::summary::{build_chart_series, compute_counts, CategoryCounts};
use super::views::{DashboardView, SearchResultsView, VehicleDetailView};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RosterLookupError {
    #[error("no vehicle with id {0} on the roster")]
    VehicleNotFound(VehicleId),
    #[error("unknown status filter '{0}' (expected one of {})", StatusFilter::accepted_labels())]
    UnknownStatus(String),
}

/// Read-only vehicle roster for the gate.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<VehicleRecord>,
}

impl Roster {
    pub fn new(records: Vec<VehicleRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &VehicleId) -> Option<&VehicleRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn detail(&self, id: &VehicleId) -> Result<VehicleDetailView, RosterLookupError> {
        self.find(id)
            .map(VehicleRecord::detail_view)
            .ok_or_else(|| RosterLookupError::VehicleNotFound(id.clone()))
    }

    pub fn filter(&self, state: &QueryState) -> Vec<&VehicleRecord> {
        filter_vehicles(&self.records, &state.query, state.status)
    }

    pub fn search(&self, state: &QueryState) -> SearchResultsView {
        let vehicles: Vec<_> = self
            .filter(state)
            .into_iter()
            .map(VehicleRecord::card_view)
            .collect();

        debug!(
            query = %state.query,
            status = %state.status,
            found = vehicles.len(),
            "roster search evaluated"
        );

        SearchResultsView {
            query: state.query.clone(),
            status: state.status,
            status_label: state.status.label(),
            found: vehicles.len(),
            vehicles,
        }
    }

    pub fn counts(&self) -> CategoryCounts {
        compute_counts(&self.records)
    }

    pub fn dashboard(&self) -> DashboardView {
        let counts = self.counts();
        DashboardView {
            counts,
            unclassified: counts.unclassified(),
            chart: build_chart_series(&counts).to_vec(),
        }
    }

    /// Demonstration roster used when no roster file is configured.
    pub fn sample() -> Self {
        Self::new(vec![
            sample_vehicle(SampleVehicle {
                id: "veh-0001",
                registration: "KA01MJ4821",
                category: "RESIDENT",
                driver: "Ravi Shankar",
                company: "Royal Catering",
                room: "A-101",
                purpose: "Resident parking",
                contact: "+91 98450 11223",
                gate_pass: true,
                reaction: "ALLOWED",
                class: Some(AccessDecisionClass::Permitted),
            }),
            sample_vehicle(SampleVehicle {
                id: "veh-0002",
                registration: "KA03HT7710",
                category: "VISITOR",
                driver: "Sita Menon",
                company: "Globex Logistics",
                room: "C-304",
                purpose: "Supplier meeting",
                contact: "+91 99001 45670",
                gate_pass: false,
                reaction: "NEED PERMISSION",
                class: Some(AccessDecisionClass::Pending),
            }),
            sample_vehicle(SampleVehicle {
                id: "veh-0003",
                registration: "MH12AB1234",
                category: "STAFF",
                driver: "Imran Khan",
                company: "Royal Catering",
                room: "Kitchen",
                purpose: "Morning shift",
                contact: "+91 90080 22114",
                gate_pass: true,
                reaction: "ALLOWED",
                class: Some(AccessDecisionClass::Permitted),
            }),
            sample_vehicle(SampleVehicle {
                id: "veh-0004",
                registration: "TN09BX0042",
                category: "BLACK LIST",
                driver: "Unknown",
                company: "Unknown",
                room: "-",
                purpose: "Previously refused entry",
                contact: "",
                gate_pass: false,
                reaction: "NOT ALLOWED",
                class: Some(AccessDecisionClass::Denied),
            }),
            sample_vehicle(SampleVehicle {
                id: "veh-0005",
                registration: "KA05MN4521",
                category: "UNAUTHORIZED",
                driver: "Prakash Rao",
                company: "Acme Movers",
                room: "B-212",
                purpose: "Furniture delivery",
                contact: "+91 97410 66789",
                gate_pass: false,
                reaction: "NOT ALLOWED",
                class: Some(AccessDecisionClass::Denied),
            }),
            sample_vehicle(SampleVehicle {
                id: "veh-0006",
                registration: "KA51Z9090",
                category: "VISITOR",
                driver: "Anita Desai",
                company: "Acme Movers",
                room: "B-212",
                purpose: "Delivery supervisor",
                contact: "+91 98860 33441",
                gate_pass: true,
                reaction: "NEED PERMISSION",
                class: Some(AccessDecisionClass::Pending),
            }),
            sample_vehicle(SampleVehicle {
                id: "veh-0007",
                registration: "KA04EV2025",
                category: "STAFF",
                driver: "Joseph Fernandes",
                company: "Royal Catering",
                room: "Stores",
                purpose: "Inventory pickup",
                contact: "+91 96320 78123",
                gate_pass: true,
                reaction: "ALLOWED",
                class: Some(AccessDecisionClass::Permitted),
            }),
        ])
    }
}

struct SampleVehicle {
    id: &'static str,
    registration: &'static str,
    category: &'static str,
    driver: &'static str,
    company: &'static str,
    room: &'static str,
    purpose: &'static str,
    contact: &'static str,
    gate_pass: bool,
    reaction: &'static str,
    class: Option<AccessDecisionClass>,
}

fn sample_vehicle(sample: SampleVehicle) -> VehicleRecord {
    VehicleRecord {
        id: VehicleId::from(sample.id),
        registration_number: sample.registration.to_string(),
        category: VehicleCategory::parse(sample.category),
        driver_name: sample.driver.to_string(),
        company_name: sample.company.to_string(),
        room_number: sample.room.to_string(),
        purpose: sample.purpose.to_string(),
        contact_number: sample.contact.to_string(),
        gate_pass_issued: sample.gate_pass,
        decision_label: AccessDecisionLabel::parse(sample.reaction),
        decision_class: sample.class,
    }
}
