use serde::{Deserialize, Serialize};

/// A member of Congress. Also used for bill sponsors, which share the shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub bioguide_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub state: Option<String>,
    pub party: Option<String>,
    pub url: Option<String>,
}
