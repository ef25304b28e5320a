use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::SummaryItem;

impl CongressClient {
    pub fn list_summaries(&self, options: &ListOptions) -> ApiResult<Vec<SummaryItem>> {
        self.get_list(RequestBuilder::new("/summaries"), options, "summaries")
    }

    pub fn list_summaries_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<SummaryItem>> {
        self.get_list(
            RequestBuilder::new("/summaries/{congress}").path(congress),
            options,
            "summaries",
        )
    }
}
