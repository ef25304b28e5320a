//! House roll-call votes.

use serde::{Deserialize, Serialize};

/// A roll-call vote as listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseVote {
    pub congress: Option<u32>,
    pub identifier: Option<u64>,
    pub legislation_number: Option<String>,
    pub legislation_type: Option<String>,
    pub legislation_url: Option<String>,
    pub result: Option<String>,
    pub roll_call_number: Option<u32>,
    pub session_number: Option<u32>,
    #[serde(rename = "sourceDataURL")]
    pub source_data_url: Option<String>,
    pub start_date: Option<String>,
    pub update_date: Option<String>,
    pub url: Option<String>,
    pub vote_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub party_type: Option<String>,
}

/// Per-party tally of one vote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteParty {
    pub nay_total: Option<u32>,
    pub not_voting_total: Option<u32>,
    pub present_total: Option<u32>,
    pub vote_party: Option<String>,
    pub yea_total: Option<u32>,
    pub party: Option<Party>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseVoteDetail {
    pub congress: Option<u32>,
    pub identifier: Option<u64>,
    pub legislation_number: Option<String>,
    pub legislation_type: Option<String>,
    pub legislation_url: Option<String>,
    pub result: Option<String>,
    pub roll_call_number: Option<u32>,
    pub session_number: Option<u32>,
    #[serde(rename = "sourceDataURL")]
    pub source_data_url: Option<String>,
    pub start_date: Option<String>,
    pub update_date: Option<String>,
    pub vote_type: Option<String>,
    pub vote_party_total: Option<Vec<VoteParty>>,
    pub vote_question: Option<String>,
}

/// How one member voted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberVote {
    #[serde(rename = "bioguideID")]
    pub bioguide_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub vote_cast: Option<String>,
    pub vote_party: Option<String>,
    pub vote_state: Option<String>,
}

/// A vote together with every member's position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseVoteMembers {
    pub congress: Option<u32>,
    pub identifier: Option<u64>,
    pub legislation_number: Option<String>,
    pub legislation_type: Option<String>,
    pub legislation_url: Option<String>,
    pub result: Option<String>,
    pub roll_call_number: Option<u32>,
    pub session_number: Option<u32>,
    #[serde(rename = "sourceDataURL")]
    pub source_data_url: Option<String>,
    pub start_date: Option<String>,
    pub update_date: Option<String>,
    pub vote_type: Option<String>,
    pub results: Option<Vec<MemberVote>>,
    pub vote_question: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn irregular_field_names() {
        let raw = json!({
            "identifier": 1182202417,
            "sourceDataURL": "https://clerk.house.gov/evs/2024/roll017.xml",
            "results": [{"bioguideID": "A000055", "voteCast": "Yea"}]
        });
        let vote: HouseVoteMembers = serde_json::from_value(raw).unwrap();
        assert_eq!(vote.identifier, Some(1182202417));
        assert!(vote.source_data_url.unwrap().ends_with("roll017.xml"));
        let results = vote.results.unwrap();
        assert_eq!(results[0].bioguide_id.as_deref(), Some("A000055"));
        assert_eq!(results[0].vote_cast.as_deref(), Some("Yea"));
    }
}
