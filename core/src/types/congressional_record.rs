use serde::{Deserialize, Serialize};

/// One issue of the daily Congressional Record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCongressionalRecord {
    pub issue_number: Option<String>,
    pub volume_number: Option<u32>,
    pub issue_date: Option<String>,
    pub congress: Option<u32>,
    pub session: Option<u32>,
    pub update_date: Option<String>,
    pub url: Option<String>,
}
