//! Committees, committee reports and committee prints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcommittee {
    pub name: Option<String>,
    pub system_code: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentCommittee {
    pub name: Option<String>,
    pub system_code: Option<String>,
    pub url: Option<String>,
}

/// A committee as listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeItem {
    pub chamber: Option<String>,
    pub committee_type_code: Option<String>,
    pub update_date: Option<String>,
    pub name: Option<String>,
    pub parent: Option<ParentCommittee>,
    pub subcommittees: Option<Vec<Subcommittee>>,
    pub system_code: Option<String>,
    pub url: Option<String>,
}

/// One historical name of a committee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeHistory {
    pub library_of_congress_name: Option<String>,
    pub official_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub update_date: Option<String>,
}

/// Count of a linked collection plus the URL to fetch it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCount {
    pub count: Option<u32>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeDetailInfo {
    pub bills: Option<ResourceCount>,
    pub communications: Option<ResourceCount>,
    pub history: Option<Vec<CommitteeHistory>>,
    pub is_current: Option<bool>,
    pub reports: Option<ResourceCount>,
    pub subcommittees: Option<Vec<Subcommittee>>,
    pub system_code: Option<String>,
    #[serde(rename = "type")]
    pub committee_type: Option<String>,
    pub update_date: Option<String>,
}

/// A bill referred to or reported by a committee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeBill {
    pub action_date: Option<String>,
    pub congress: Option<u32>,
    pub number: Option<String>,
    pub relationship_type: Option<String>,
    #[serde(rename = "type")]
    pub bill_type: Option<String>,
    pub update_date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeReportItem {
    pub citation: Option<String>,
    pub congress: Option<u32>,
    pub number: Option<String>,
    pub part: Option<u32>,
    #[serde(rename = "type")]
    pub report_type: Option<String>,
    pub update_date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteeReportDetail {
    pub citation: Option<String>,
    pub congress: Option<u32>,
    pub is_conference_report: Option<bool>,
    pub number: Option<String>,
    pub part: Option<u32>,
    pub text: Option<ResourceCount>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub report_type: Option<String>,
    pub update_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeReportText {
    #[serde(rename = "type")]
    pub text_type: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteePrintItem {
    pub chamber: Option<String>,
    pub citation: Option<String>,
    pub congress: Option<u32>,
    pub jacket_number: Option<u32>,
    pub number: Option<String>,
    pub title: Option<String>,
    pub update_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitteePrintDetail {
    pub chamber: Option<String>,
    pub citation: Option<String>,
    pub congress: Option<u32>,
    pub jacket_number: Option<u32>,
    pub number: Option<String>,
    pub text: Option<ResourceCount>,
    pub title: Option<String>,
    pub update_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteePrintText {
    #[serde(rename = "type")]
    pub text_type: Option<String>,
    pub url: Option<String>,
}
