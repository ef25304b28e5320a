//! Laws. The `/law` endpoints return bill-shaped records under `bills` and
//! `bill`, with the enacted laws listed in `laws`.

use serde::{Deserialize, Serialize};

use super::bills::{LatestAction, Law};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawItem {
    pub congress: Option<u32>,
    pub latest_action: Option<LatestAction>,
    pub laws: Option<Vec<Law>>,
    pub number: Option<String>,
    pub origin_chamber: Option<String>,
    pub origin_chamber_code: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub law_type: Option<String>,
    pub update_date: Option<String>,
    pub update_date_including_text: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawDetail {
    pub congress: Option<u32>,
    pub latest_action: Option<LatestAction>,
    pub laws: Option<Vec<Law>>,
    pub number: Option<String>,
    pub origin_chamber: Option<String>,
    pub origin_chamber_code: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub law_type: Option<String>,
    pub update_date: Option<String>,
    pub update_date_including_text: Option<String>,
    pub url: Option<String>,
}
