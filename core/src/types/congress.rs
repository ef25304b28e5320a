//! Congresses and their sessions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub chamber: Option<String>,
    pub number: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// One Congress, e.g. "118th Congress". Years are strings on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Congress {
    pub end_year: Option<String>,
    pub name: Option<String>,
    pub sessions: Option<Vec<Session>>,
    pub start_year: Option<String>,
    pub url: Option<String>,
}
