use super::domain::{AccessDecisionClass, StatusFilter, VehicleId, VehicleRecord};
use super::summary::{CategoryCounts, ChartSlice};
use serde::Serialize;

/// Compact projection shown in the vehicle list.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleCardView {
    pub id: VehicleId,
    pub registration_number: String,
    pub category: String,
    pub driver_name: String,
    pub company_name: String,
    pub decision_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_class: Option<AccessDecisionClass>,
}

/// Everything the gate knows about one vehicle.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleDetailView {
    pub id: VehicleId,
    pub registration_number: String,
    pub category: String,
    pub driver_name: String,
    pub company_name: String,
    pub purpose: String,
    pub room_number: String,
    pub contact_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_link: Option<String>,
    pub gate_pass_issued: bool,
    pub gate_pass_label: &'static str,
    pub decision_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_class: Option<AccessDecisionClass>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResultsView {
    pub query: String,
    pub status: StatusFilter,
    pub status_label: &'static str,
    pub found: usize,
    pub vehicles: Vec<VehicleCardView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub counts: CategoryCounts,
    pub unclassified: usize,
    pub chart: Vec<ChartSlice>,
}

impl VehicleRecord {
    pub fn card_view(&self) -> VehicleCardView {
        VehicleCardView {
            id: self.id.clone(),
            registration_number: self.registration_number.clone(),
            category: self.category.label().to_string(),
            driver_name: self.driver_name.clone(),
            company_name: self.company_name.clone(),
            decision_label: self.decision_label.label().to_string(),
            decision_class: self.decision_class,
        }
    }

    pub fn detail_view(&self) -> VehicleDetailView {
        VehicleDetailView {
            id: self.id.clone(),
            registration_number: self.registration_number.clone(),
            category: self.category.label().to_string(),
            driver_name: self.driver_name.clone(),
            company_name: self.company_name.clone(),
            purpose: self.purpose.clone(),
            room_number: self.room_number.clone(),
            contact_number: self.contact_number.clone(),
            contact_link: dial_link(&self.contact_number),
            gate_pass_issued: self.gate_pass_issued,
            gate_pass_label: if self.gate_pass_issued { "YES" } else { "NO" },
            decision_label: self.decision_label.label().to_string(),
            decision_class: self.decision_class,
        }
    }
}

fn dial_link(contact: &str) -> Option<String> {
    let digits: String = contact
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect();
    if digits.is_empty() {
        None
    } else {
        Some(format!("tel:{digits}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::domain::{AccessDecisionLabel, VehicleCategory};

    fn record(contact: &str, gate_pass: bool) -> VehicleRecord {
        VehicleRecord {
            id: VehicleId::from("veh-0007"),
            registration_number: "KA05MN4521".to_string(),
            category: VehicleCategory::parse("Contractor"),
            driver_name: "Farhan".to_string(),
            company_name: "Skyline Electricals".to_string(),
            room_number: "B-12".to_string(),
            purpose: "Panel repair".to_string(),
            contact_number: contact.to_string(),
            gate_pass_issued: gate_pass,
            decision_label: AccessDecisionLabel::NeedPermission,
            decision_class: Some(AccessDecisionClass::Pending),
        }
    }

    #[test]
    fn detail_view_exposes_dialable_contact_and_gate_pass() {
        let view = record("+91 98450 12345", true).detail_view();
        assert_eq!(view.contact_link.as_deref(), Some("tel:+919845012345"));
        assert_eq!(view.gate_pass_label, "YES");
        assert_eq!(view.category, "Contractor");
        assert_eq!(view.decision_label, "NEED PERMISSION");
    }

    #[test]
    fn detail_view_omits_link_without_digits() {
        let view = record("n/a", false).detail_view();
        assert!(view.contact_link.is_none());
        assert_eq!(view.gate_pass_label, "NO");

        let payload = serde_json::to_value(&view).expect("serializes");
        assert!(payload.get("contact_link").is_none());
        assert_eq!(payload["decision_class"], "pending");
    }
}
