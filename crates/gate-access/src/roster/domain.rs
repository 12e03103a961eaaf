use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque identifier for a vehicle visit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl VehicleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Vehicle classification as recorded at the gate.
///
/// Known categories are matched case-insensitively and always render in their canonical
/// upper-case spelling (`"Visitor"` becomes `VISITOR`). Anything else is kept as
/// [`VehicleCategory::Other`] with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    Visitor,
    Resident,
    Unauthorized,
    Staff,
    BlackList,
    Other(String),
}

impl VehicleCategory {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "VISITOR" => Self::Visitor,
            "RESIDENT" => Self::Resident,
            "UNAUTHORIZED" => Self::Unauthorized,
            "STAFF" => Self::Staff,
            "BLACK LIST" | "BLACKLIST" => Self::BlackList,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Visitor => "VISITOR",
            Self::Resident => "RESIDENT",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Staff => "STAFF",
            Self::BlackList => "BLACK LIST",
            Self::Other(raw) => raw,
        }
    }
}

impl Serialize for VehicleCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for VehicleCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Human-readable gate decision, normalized the same way as [`VehicleCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessDecisionLabel {
    Allowed,
    NotAllowed,
    NeedPermission,
    Other(String),
}

impl AccessDecisionLabel {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ALLOWED" => Self::Allowed,
            "NOT ALLOWED" => Self::NotAllowed,
            "NEED PERMISSION" => Self::NeedPermission,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Allowed => "ALLOWED",
            Self::NotAllowed => "NOT ALLOWED",
            Self::NeedPermission => "NEED PERMISSION",
            Self::Other(raw) => raw,
        }
    }
}

impl Serialize for AccessDecisionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for AccessDecisionLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Closed classification of a gate decision; drives filtering, aggregation, and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecisionClass {
    Permitted,
    Denied,
    Pending,
}

impl AccessDecisionClass {
    pub const fn ordered() -> [Self; 3] {
        [Self::Permitted, Self::Denied, Self::Pending]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Permitted => "Allowed",
            Self::Denied => "Denied",
            Self::Pending => "Pending",
        }
    }

    /// Maps a decision label onto its class. Unrecognized labels have no class.
    pub fn from_label(label: &AccessDecisionLabel) -> Option<Self> {
        match label {
            AccessDecisionLabel::Allowed => Some(Self::Permitted),
            AccessDecisionLabel::NotAllowed => Some(Self::Denied),
            AccessDecisionLabel::NeedPermission => Some(Self::Pending),
            AccessDecisionLabel::Other(_) => None,
        }
    }

    /// Parses the class column of a roster export, accepting the legacy UI status names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "permitted" | "allowed" | "success" => Some(Self::Permitted),
            "denied" | "danger" => Some(Self::Denied),
            "pending" | "warning" => Some(Self::Pending),
            _ => None,
        }
    }
}

/// Status filter offered on the vehicle list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Permitted,
    Denied,
    Pending,
}

impl StatusFilter {
    pub const fn ordered() -> [Self; 4] {
        [Self::All, Self::Permitted, Self::Denied, Self::Pending]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Permitted => "ALLOWED",
            Self::Denied => "NOT ALLOWED",
            Self::Pending => "NEED PERMISSION",
        }
    }

    /// Class a record must carry to pass this filter; `None` for [`StatusFilter::All`].
    pub const fn class(self) -> Option<AccessDecisionClass> {
        match self {
            Self::All => None,
            Self::Permitted => Some(AccessDecisionClass::Permitted),
            Self::Denied => Some(AccessDecisionClass::Denied),
            Self::Pending => Some(AccessDecisionClass::Pending),
        }
    }

    /// Display labels of every filter, in menu order, for help and error text.
    pub fn accepted_labels() -> String {
        Self::ordered().map(Self::label).join(", ")
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "" | "all" => Some(Self::All),
            "allowed" | "permitted" => Some(Self::Permitted),
            "not allowed" | "denied" => Some(Self::Denied),
            "need permission" | "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One vehicle on the gate roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub registration_number: String,
    pub category: VehicleCategory,
    pub driver_name: String,
    pub company_name: String,
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub gate_pass_issued: bool,
    pub decision_label: AccessDecisionLabel,
    #[serde(default, deserialize_with = "lenient_class")]
    pub decision_class: Option<AccessDecisionClass>,
}

fn lenient_class<'de, D>(deserializer: D) -> Result<Option<AccessDecisionClass>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(AccessDecisionClass::parse))
}

/// Caller-owned search state: the free-text query plus the selected status filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub status: StatusFilter,
}

impl QueryState {
    pub fn new(query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.status = StatusFilter::All;
    }
}
