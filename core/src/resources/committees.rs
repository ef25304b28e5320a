use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::{CommitteeBill, CommitteeDetailInfo, CommitteeItem};

impl CongressClient {
    pub fn list_committees(&self, options: &ListOptions) -> ApiResult<Vec<CommitteeItem>> {
        self.get_list(RequestBuilder::new("/committee"), options, "committees")
    }

    /// Committees of one chamber: `house`, `senate` or `joint`.
    pub fn list_committees_by_chamber(
        &self,
        chamber: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<CommitteeItem>> {
        self.get_list(
            RequestBuilder::new("/committee/{chamber}").path(chamber),
            options,
            "committees",
        )
    }

    pub fn list_committees_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<CommitteeItem>> {
        self.get_list(
            RequestBuilder::new("/committee/{congress}").path(congress),
            options,
            "committees",
        )
    }

    pub fn list_committees_by_congress_and_chamber(
        &self,
        congress: u32,
        chamber: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<CommitteeItem>> {
        self.get_list(
            RequestBuilder::new("/committee/{congress}/{chamber}")
                .path(congress)
                .path(chamber),
            options,
            "committees",
        )
    }

    pub fn get_committee(
        &self,
        chamber: &str,
        committee_code: &str,
    ) -> ApiResult<CommitteeDetailInfo> {
        self.get_one(
            RequestBuilder::new("/committee/{chamber}/{committeeCode}")
                .path(chamber)
                .path(committee_code),
            "committee",
        )
    }

    pub fn get_committee_bills(
        &self,
        chamber: &str,
        committee_code: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<CommitteeBill>> {
        self.get_list(
            RequestBuilder::new("/committee/{chamber}/{committeeCode}/bills")
                .path(chamber)
                .path(committee_code),
            options,
            "bills",
        )
    }
}
