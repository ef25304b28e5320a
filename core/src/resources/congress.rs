use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::Congress;

impl CongressClient {
    pub fn list_congresses(&self, options: &ListOptions) -> ApiResult<Vec<Congress>> {
        self.get_list(RequestBuilder::new("/congress"), options, "congresses")
    }

    pub fn get_congress(&self, congress: u32) -> ApiResult<Congress> {
        self.get_one(
            RequestBuilder::new("/congress/{congress}").path(congress),
            "congress",
        )
    }

    pub fn get_current_congress(&self) -> ApiResult<Congress> {
        self.get_one(RequestBuilder::new("/congress/current"), "congress")
    }
}
