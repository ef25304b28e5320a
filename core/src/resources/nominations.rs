use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::{Nomination, Nominee};

impl CongressClient {
    pub fn list_nominations(&self, options: &ListOptions) -> ApiResult<Vec<Nomination>> {
        self.get_list(RequestBuilder::new("/nomination"), options, "nominations")
    }

    pub fn list_nominations_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Nomination>> {
        self.get_list(
            RequestBuilder::new("/nomination/{congress}").path(congress),
            options,
            "nominations",
        )
    }

    pub fn get_nomination(&self, congress: u32, nomination_number: &str) -> ApiResult<Nomination> {
        self.get_one(
            RequestBuilder::new("/nomination/{congress}/{nominationNumber}")
                .path(congress)
                .path(nomination_number),
            "nomination",
        )
    }

    pub fn get_nomination_nominees(
        &self,
        congress: u32,
        nomination_number: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<Nominee>> {
        self.get_list(
            RequestBuilder::new("/nomination/{congress}/{nominationNumber}/nominees")
                .path(congress)
                .path(nomination_number),
            options,
            "nominees",
        )
    }
}
