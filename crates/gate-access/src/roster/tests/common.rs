use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::roster::catalog::Roster;
use crate::roster::domain::{
    AccessDecisionClass, AccessDecisionLabel, VehicleCategory, VehicleId, VehicleRecord,
};

pub(super) fn vehicle(
    id: &str,
    registration: &str,
    driver: &str,
    company: &str,
    class: Option<AccessDecisionClass>,
) -> VehicleRecord {
    let label = match class {
        Some(AccessDecisionClass::Permitted) => AccessDecisionLabel::Allowed,
        Some(AccessDecisionClass::Denied) => AccessDecisionLabel::NotAllowed,
        Some(AccessDecisionClass::Pending) => AccessDecisionLabel::NeedPermission,
        None => AccessDecisionLabel::Other("UNDER REVIEW".to_string()),
    };

    VehicleRecord {
        id: VehicleId::from(id),
        registration_number: registration.to_string(),
        category: VehicleCategory::Visitor,
        driver_name: driver.to_string(),
        company_name: company.to_string(),
        room_number: "A-12".to_string(),
        purpose: "Site visit".to_string(),
        contact_number: "080 4455 6677".to_string(),
        gate_pass_issued: class == Some(AccessDecisionClass::Permitted),
        decision_label: label,
        decision_class: class,
    }
}

pub(super) fn gate_roster() -> Arc<Roster> {
    Arc::new(Roster::new(vec![
        vehicle(
            "v-1",
            "KA01A1",
            "Ravi",
            "Acme",
            Some(AccessDecisionClass::Permitted),
        ),
        vehicle(
            "v-2",
            "KA01B2",
            "Sita",
            "Globex",
            Some(AccessDecisionClass::Denied),
        ),
        vehicle(
            "v-3",
            "KA02C3",
            "Ravi Kumar",
            "Acme",
            Some(AccessDecisionClass::Pending),
        ),
        vehicle("v-4", "TN09Z9", "Meena", "Orbit", None),
    ]))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
