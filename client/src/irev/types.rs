//! Data types for IReV API responses.
//!
//! Upstream identifies every entity with `_id`; the Rust field is `id` and is
//! renamed on the wire, so serializing a value back yields upstream names.
//! Keys without a typed field (`__v`, flags added upstream later) are kept in
//! `extra` and written back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A category of election (presidential, governorship, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElectionType {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Short code, e.g. `"PRES"`
    pub code: String,
    pub election_type_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Election {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub election_date: String,
    pub election_id: i64,
    /// Identifier of the owning [`ElectionType`]
    pub election_type: String,
    pub election_type_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregate result-upload counts for an election.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElectionPollStats {
    /// Number of polling units
    pub total: u64,
    /// Number of polling units with an uploaded result document
    pub submitted: u64,
}

/// Stats payload as upstream names it.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPollStats {
    pus: u64,
    documents: u64,
}

impl From<RawPollStats> for ElectionPollStats {
    fn from(raw: RawPollStats) -> Self {
        Self {
            total: raw.pus,
            submitted: raw.documents,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct State {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub state_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Local Government Area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lga {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub lga_id: i64,
    /// Identifier of the parent [`State`]
    pub state: String,
    pub state_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Constituency and district references may be null for wards upstream has
/// not mapped yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ward {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub ward_id: i64,
    #[serde(default)]
    pub old_name: Option<String>,
    pub state: String,
    pub state_id: i64,
    /// Identifier of the parent [`Lga`]
    pub lga: String,
    pub lga_id: i64,
    #[serde(default)]
    pub state_constituency: Option<String>,
    #[serde(default)]
    pub state_constituency_id: Option<i64>,
    #[serde(default)]
    pub federal_constituency: Option<String>,
    #[serde(default)]
    pub federal_constituency_id: Option<i64>,
    #[serde(default)]
    pub senatorial_district: Option<String>,
    #[serde(default)]
    pub senatorial_district_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The leaf unit at which results are recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollingUnit {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub polling_unit_id: i64,
    #[serde(default)]
    pub old_name: Option<String>,
    pub is_accredited: bool,
    pub ward_id: i64,
    /// Identifier of the parent [`Ward`], never the nested object.
    pub ward: String,
    pub pu_code: String,
    pub pu_code_string: String,
    pub batch: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A result sheet uploaded for a polling unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    pub external: bool,
    pub status: i64,
    pub size: u64,
    pub url: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from the LGA endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LgaApiResult {
    pub wards: Vec<Ward>,
    pub lga: Lga,
    pub state: State,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from the polling unit endpoints.
///
/// `document` is null upstream until a result sheet has been uploaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PUApiResult {
    pub polling_unit: PollingUnit,
    pub document: Option<Document>,
    #[serde(default)]
    pub old_documents: Vec<Document>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
