use serde::{Deserialize, Serialize};

/// A bill summary as returned by the cross-bill `/summaries` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryItem {
    pub action_date: Option<String>,
    pub action_desc: Option<String>,
    pub text: Option<String>,
    pub update_date: Option<String>,
    pub version_code: Option<String>,
}
