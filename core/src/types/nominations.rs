use serde::{Deserialize, Serialize};

/// A presidential nomination. `number` is a string on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nomination {
    pub congress: Option<u32>,
    pub number: Option<String>,
    pub part_number: Option<String>,
    pub citation: Option<String>,
    pub description: Option<String>,
    pub received_date: Option<String>,
    pub update_date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nominee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub state: Option<String>,
}
