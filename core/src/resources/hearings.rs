use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::Hearing;

impl CongressClient {
    pub fn list_hearings(&self, options: &ListOptions) -> ApiResult<Vec<Hearing>> {
        self.get_list(RequestBuilder::new("/hearing"), options, "hearings")
    }

    pub fn list_hearings_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Hearing>> {
        self.get_list(
            RequestBuilder::new("/hearing/{congress}").path(congress),
            options,
            "hearings",
        )
    }

    /// The chamber is sent lower-cased, so `"House"` and `"house"` are
    /// equivalent.
    pub fn list_hearings_by_chamber(
        &self,
        congress: u32,
        chamber: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<Hearing>> {
        self.get_list(
            RequestBuilder::new("/hearing/{congress}/{chamber}")
                .path(congress)
                .path(chamber.to_lowercase()),
            options,
            "hearings",
        )
    }

    pub fn get_hearing(
        &self,
        congress: u32,
        chamber: &str,
        jacket_number: u32,
    ) -> ApiResult<Hearing> {
        self.get_one(
            RequestBuilder::new("/hearing/{congress}/{chamber}/{jacketNumber}")
                .path(congress)
                .path(chamber.to_lowercase())
                .path(jacket_number),
            "hearing",
        )
    }
}
