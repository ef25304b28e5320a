use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::Treaty;

impl CongressClient {
    pub fn list_treaties(&self, options: &ListOptions) -> ApiResult<Vec<Treaty>> {
        self.get_list(RequestBuilder::new("/treaty"), options, "treaties")
    }

    pub fn list_treaties_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Treaty>> {
        self.get_list(
            RequestBuilder::new("/treaty/{congress}").path(congress),
            options,
            "treaties",
        )
    }

    pub fn get_treaty(&self, congress: u32, treaty_number: u32) -> ApiResult<Treaty> {
        self.get_one(
            RequestBuilder::new("/treaty/{congress}/{treatyNumber}")
                .path(congress)
                .path(treaty_number),
            "treaty",
        )
    }
}
