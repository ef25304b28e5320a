use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::{HouseVote, HouseVoteDetail, HouseVoteMembers};

impl CongressClient {
    pub fn list_house_votes(&self, options: &ListOptions) -> ApiResult<Vec<HouseVote>> {
        self.get_list(
            RequestBuilder::new("/house-vote"),
            options,
            "houseRollCallVotes",
        )
    }

    pub fn list_house_votes_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<HouseVote>> {
        self.get_list(
            RequestBuilder::new("/house-vote/{congress}").path(congress),
            options,
            "houseRollCallVotes",
        )
    }

    pub fn list_house_votes_by_session(
        &self,
        congress: u32,
        session: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<HouseVote>> {
        self.get_list(
            RequestBuilder::new("/house-vote/{congress}/{session}")
                .path(congress)
                .path(session),
            options,
            "houseRollCallVotes",
        )
    }

    pub fn get_house_vote(
        &self,
        congress: u32,
        session: u32,
        vote_number: u32,
    ) -> ApiResult<HouseVoteDetail> {
        self.get_one(
            RequestBuilder::new("/house-vote/{congress}/{session}/{voteNumber}")
                .path(congress)
                .path(session)
                .path(vote_number),
            "houseRollCallVote",
        )
    }

    /// The vote with each member's position in `results`. `options` pages
    /// through the member list.
    pub fn get_house_vote_members(
        &self,
        congress: u32,
        session: u32,
        vote_number: u32,
        options: &ListOptions,
    ) -> ApiResult<HouseVoteMembers> {
        self.get_one(
            RequestBuilder::new("/house-vote/{congress}/{session}/{voteNumber}/members")
                .path(congress)
                .path(session)
                .path(vote_number)
                .list(options),
            "houseRollCallVoteMemberVotes",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::resources::testing::{client_returning, only_path};

    #[test]
    fn vote_detail_party_totals() {
        let (client, transport) = client_returning(
            r#"{"houseRollCallVote": {"rollCallNumber": 17, "result": "Passed",
                "votePartyTotal": [{"voteParty": "R", "yeaTotal": 210, "party": {"name": "Republican", "type": "R"}}]}}"#,
        );
        let vote = client.get_house_vote(118, 2, 17).unwrap();
        assert_eq!(vote.roll_call_number, Some(17));
        let totals = vote.vote_party_total.unwrap();
        assert_eq!(totals[0].yea_total, Some(210));
        assert_eq!(totals[0].party.as_ref().unwrap().party_type.as_deref(), Some("R"));
        assert_eq!(only_path(&transport), "/house-vote/118/2/17");
    }

    #[test]
    fn member_votes_require_wrapper() {
        let (client, transport) = client_returning(r#"{"request": {}}"#);
        let err = client
            .get_house_vote_members(118, 2, 17, &ListOptions::new())
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { .. }));
        assert_eq!(only_path(&transport), "/house-vote/118/2/17/members");
    }
}
