use super::super::domain::{
    AccessDecisionClass, AccessDecisionLabel, VehicleCategory, VehicleId, VehicleRecord,
};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;

pub(crate) fn parse_csv_records<R: Read>(reader: R) -> Result<Vec<VehicleRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let rows = csv_reader
        .deserialize::<RosterRow>()
        .collect::<Result<Vec<_>, _>>()?;

    // Generated ids must not shadow an id written elsewhere in the export.
    let mut taken: HashSet<String> = rows.iter().filter_map(|row| row.id.clone()).collect();

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let id = match row.id.clone() {
                Some(id) => VehicleId(id),
                None => VehicleId(generate_id(index + 1, &mut taken)),
            };
            row.into_record(id)
        })
        .collect();

    Ok(records)
}

fn generate_id(row_number: usize, taken: &mut HashSet<String>) -> String {
    let base = format!("veh-{row_number:04}");
    let mut candidate = base.clone();
    let mut attempt = 2;
    while taken.contains(&candidate) {
        candidate = format!("{base}-{attempt}");
        attempt += 1;
    }
    taken.insert(candidate.clone());
    candidate
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "ID", default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(rename = "Vehicle No")]
    vehicle_no: String,
    #[serde(rename = "Type", default)]
    category: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Company", default)]
    company: String,
    #[serde(rename = "Room", default)]
    room: String,
    #[serde(rename = "Purpose", default)]
    purpose: String,
    #[serde(rename = "Contact", default)]
    contact: String,
    #[serde(rename = "Gate Pass", default)]
    gate_pass: String,
    #[serde(rename = "Reaction", default)]
    reaction: String,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
}

impl RosterRow {
    fn into_record(self, id: VehicleId) -> VehicleRecord {
        let decision_label = AccessDecisionLabel::parse(&self.reaction);
        // An explicit status column is trusted as-is; only a missing one is derived.
        let decision_class = match self.status.as_deref() {
            Some(status) => AccessDecisionClass::parse(status),
            None => AccessDecisionClass::from_label(&decision_label),
        };

        VehicleRecord {
            id,
            registration_number: self.vehicle_no,
            category: VehicleCategory::parse(&self.category),
            driver_name: self.name,
            company_name: self.company,
            room_number: self.room,
            purpose: self.purpose,
            contact_number: self.contact,
            gate_pass_issued: parse_flag(&self.gate_pass),
            decision_label,
            decision_class,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_pass_flag_accepts_common_spellings() {
        assert!(parse_flag("YES"));
        assert!(parse_flag(" y "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("no"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn missing_status_column_derives_class_from_reaction() {
        let csv = "Vehicle No,Type,Name,Company,Reaction\n\
KA01A1,VISITOR,Ravi,Acme,NOT ALLOWED\n\
KA01B2,VENDOR,Sita,Globex,ESCORT ONLY\n";
        let records = parse_csv_records(csv.as_bytes()).expect("csv parses");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, VehicleId::from("veh-0001"));
        assert_eq!(records[0].decision_class, Some(AccessDecisionClass::Denied));
        assert_eq!(records[1].id, VehicleId::from("veh-0002"));
        assert_eq!(records[1].category.label(), "VENDOR");
        assert!(records[1].decision_class.is_none());
    }

    #[test]
    fn generated_id_steps_around_explicit_ids() {
        let csv = "ID,Vehicle No,Reaction\n\
,KA01A1,ALLOWED\n\
veh-0001,KA01B2,ALLOWED\n\
veh-0001-2,KA02C3,ALLOWED\n";
        let records = parse_csv_records(csv.as_bytes()).expect("csv parses");
        let ids: Vec<_> = records.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["veh-0001-3", "veh-0001", "veh-0001-2"]);
    }
}
