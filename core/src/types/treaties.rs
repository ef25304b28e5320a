use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Treaty {
    pub congress: Option<u32>,
    pub number: Option<String>,
    pub part_number: Option<String>,
    #[serde(rename = "suffix")]
    pub treaty_suffix: Option<String>,
    pub topic: Option<String>,
    pub in_force_date: Option<String>,
    pub transmitted_date: Option<String>,
    pub update_date: Option<String>,
    pub url: Option<String>,
}
