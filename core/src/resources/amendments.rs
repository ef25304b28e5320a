use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::Amendment;

impl CongressClient {
    pub fn list_amendments(&self, options: &ListOptions) -> ApiResult<Vec<Amendment>> {
        self.get_list(RequestBuilder::new("/amendment"), options, "amendments")
    }

    pub fn list_amendments_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Amendment>> {
        self.get_list(
            RequestBuilder::new("/amendment/{congress}").path(congress),
            options,
            "amendments",
        )
    }
}
