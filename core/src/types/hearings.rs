//! Committee hearings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingDate {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedMeeting {
    pub event_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingFormat {
    #[serde(rename = "type")]
    pub format_type: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingCommittee {
    pub name: Option<String>,
    pub system_code: Option<String>,
    pub url: Option<String>,
}

/// A hearing. List responses fill only the first few fields; the detail
/// endpoint adds committees, dates and formats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hearing {
    pub chamber: Option<String>,
    pub congress: Option<u32>,
    pub jacket_number: Option<u32>,
    pub number: Option<u32>,
    pub part: Option<u32>,
    pub title: Option<String>,
    pub update_date: Option<String>,
    pub url: Option<String>,
    pub associated_meeting: Option<AssociatedMeeting>,
    pub citation: Option<String>,
    pub committees: Option<Vec<HearingCommittee>>,
    pub dates: Option<Vec<HearingDate>>,
    pub formats: Option<Vec<HearingFormat>>,
    pub library_of_congress_identifier: Option<String>,
}
