//! Bills and the sub-resources hanging off a single bill.

use serde::{Deserialize, Serialize};

use super::members::Sponsor;

/// Most recent action on a bill or amendment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestAction {
    pub action_date: Option<String>,
    pub text: Option<String>,
}

/// A bill as it appears in list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub congress: Option<u32>,
    pub latest_action: Option<LatestAction>,
    pub number: Option<String>,
    pub origin_chamber: Option<String>,
    pub origin_chamber_code: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub bill_type: Option<String>,
    pub update_date: Option<String>,
    pub update_date_including_text: Option<String>,
    pub url: Option<String>,
}

/// Full bill record. A superset of [`Bill`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDetail {
    pub congress: Option<u32>,
    pub latest_action: Option<LatestAction>,
    pub number: Option<String>,
    pub origin_chamber: Option<String>,
    pub origin_chamber_code: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub bill_type: Option<String>,
    pub update_date: Option<String>,
    pub update_date_including_text: Option<String>,
    pub url: Option<String>,
    pub introduced_date: Option<String>,
    pub sponsors: Option<Vec<Sponsor>>,
    pub policy_area: Option<PolicyArea>,
    pub laws: Option<Vec<Law>>,
}

/// Public or private law enacted from a bill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Law {
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub law_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyArea {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub action_code: Option<String>,
    pub action_date: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub action_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amendment {
    pub congress: Option<u32>,
    pub latest_action: Option<LatestAction>,
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub amendment_type: Option<String>,
    pub url: Option<String>,
}

/// Committee reference attached to a bill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Committee {
    pub name: Option<String>,
    pub system_code: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cosponsor {
    pub bioguide_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub state: Option<String>,
    pub party: Option<String>,
    pub sponsorship_date: Option<String>,
    pub is_original_cosponsor: Option<bool>,
}

/// A bill related to another one. Unlike [`Bill`], `number` is numeric here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedBill {
    pub congress: Option<u32>,
    pub number: Option<u32>,
    #[serde(rename = "type")]
    pub bill_type: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub latest_action: Option<LatestAction>,
    pub relationship_details: Option<Vec<RelationshipDetail>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDetail {
    pub identified_by: Option<String>,
    #[serde(rename = "type")]
    pub relationship_type: Option<String>,
}

/// Subject terms for one bill, returned under the `subjects` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSubjects {
    pub legislative_subjects: Option<Vec<Subject>>,
    pub policy_area: Option<PolicyArea>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub name: Option<String>,
    pub update_date: Option<String>,
}

/// CRS summary of one bill version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub action_date: Option<String>,
    pub action_desc: Option<String>,
    pub text: Option<String>,
    pub update_date: Option<String>,
    pub version_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextVersion {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub text_type: Option<String>,
    pub formats: Option<Vec<TextFormat>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFormat {
    #[serde(rename = "type")]
    pub format_type: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub title: Option<String>,
    pub title_type: Option<String>,
    pub title_type_code: Option<u32>,
}
