use super::domain::{StatusFilter, VehicleRecord};

/// Returns true when `record` should appear in the list for `query` and `status`.
///
/// The query is matched case-insensitively as an unanchored substring of the registration
/// number, driver name, or company name. It is not trimmed, so a whitespace-only query only
/// matches fields that contain that whitespace.
pub fn matches(record: &VehicleRecord, query: &str, status: StatusFilter) -> bool {
    matches_lowered(record, &query.to_lowercase(), status)
}

/// Order-preserving subsequence of `records` that pass [`matches`].
pub fn filter_vehicles<'a>(
    records: &'a [VehicleRecord],
    query: &str,
    status: StatusFilter,
) -> Vec<&'a VehicleRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_lowered(record, &needle, status))
        .collect()
}

fn matches_lowered(record: &VehicleRecord, needle: &str, status: StatusFilter) -> bool {
    text_matches(record, needle) && status_matches(record, status)
}

fn text_matches(record: &VehicleRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [
        &record.registration_number,
        &record.driver_name,
        &record.company_name,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn status_matches(record: &VehicleRecord, status: StatusFilter) -> bool {
    match status.class() {
        None => true,
        Some(class) => record.decision_class == Some(class),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::domain::{
        AccessDecisionClass, AccessDecisionLabel, VehicleCategory, VehicleId,
    };

    fn vehicle(
        reg: &str,
        name: &str,
        company: &str,
        class: Option<AccessDecisionClass>,
    ) -> VehicleRecord {
        VehicleRecord {
            id: VehicleId(reg.to_string()),
            registration_number: reg.to_string(),
            category: VehicleCategory::Visitor,
            driver_name: name.to_string(),
            company_name: company.to_string(),
            room_number: String::new(),
            purpose: String::new(),
            contact_number: String::new(),
            gate_pass_issued: false,
            decision_label: AccessDecisionLabel::Allowed,
            decision_class: class,
        }
    }

    #[test]
    fn empty_query_and_all_matches_everything() {
        let unclassified = vehicle("TN09Z9", "Meena", "Orbit", None);
        let pending = vehicle(
            "KA02C3",
            "Ravi Kumar",
            "Acme",
            Some(AccessDecisionClass::Pending),
        );
        assert!(matches(&unclassified, "", StatusFilter::All));
        assert!(matches(&pending, "", StatusFilter::All));
    }

    #[test]
    fn registration_match_ignores_case() {
        let record = vehicle(
            "MH12AB1234",
            "Asha",
            "Initech",
            Some(AccessDecisionClass::Permitted),
        );
        assert!(matches(&record, "mh12", StatusFilter::All));
        assert!(matches(&record, "Ab12", StatusFilter::All));
        assert!(!matches(&record, "mh13", StatusFilter::All));
    }

    #[test]
    fn substring_is_unanchored_on_every_search_field() {
        let record = vehicle(
            "KA01A1",
            "Ravi Kumar",
            "Globex Logistics",
            Some(AccessDecisionClass::Denied),
        );
        assert!(matches(&record, "01a", StatusFilter::All));
        assert!(matches(&record, "kumar", StatusFilter::All));
        assert!(matches(&record, "LOGISTICS", StatusFilter::All));
        assert!(!matches(&record, "ravi  kumar", StatusFilter::All));
    }

    #[test]
    fn informational_fields_are_not_searched() {
        let mut record =
            vehicle("KA01A1", "Ravi", "Acme", Some(AccessDecisionClass::Permitted));
        record.purpose = "Delivery".to_string();
        record.room_number = "204".to_string();
        assert!(!matches(&record, "delivery", StatusFilter::All));
        assert!(!matches(&record, "204", StatusFilter::All));
    }

    #[test]
    fn status_filter_requires_matching_class() {
        let denied = vehicle("KA01B2", "Sita", "Globex", Some(AccessDecisionClass::Denied));
        assert!(matches(&denied, "", StatusFilter::Denied));
        assert!(!matches(&denied, "", StatusFilter::Permitted));
        assert!(!matches(&denied, "", StatusFilter::Pending));
    }

    #[test]
    fn unclassified_record_only_passes_all() {
        let record = vehicle("TN09Z9", "Meena", "Orbit", None);
        for status in [StatusFilter::Permitted, StatusFilter::Denied, StatusFilter::Pending] {
            assert!(!matches(&record, "", status));
        }
    }

    #[test]
    fn whitespace_query_is_literal() {
        let spaced = vehicle("KA 01 A1", "Ravi", "Acme", Some(AccessDecisionClass::Permitted));
        let compact = vehicle("KA01B2", "Sita", "Globex", Some(AccessDecisionClass::Denied));
        let records = vec![spaced, compact];
        let found = filter_vehicles(&records, " ", StatusFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].registration_number, "KA 01 A1");
    }

    #[test]
    fn filter_on_empty_roster_is_empty() {
        assert!(filter_vehicles(&[], "ravi", StatusFilter::All).is_empty());
    }
}
