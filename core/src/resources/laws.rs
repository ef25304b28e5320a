use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::{LawDetail, LawItem};

impl CongressClient {
    pub fn list_laws(&self, options: &ListOptions) -> ApiResult<Vec<LawItem>> {
        self.get_list(RequestBuilder::new("/law"), options, "bills")
    }

    pub fn list_laws_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<LawItem>> {
        self.get_list(
            RequestBuilder::new("/law/{congress}").path(congress),
            options,
            "bills",
        )
    }

    /// Laws of one kind: `pub` or `priv`.
    pub fn list_laws_by_type(
        &self,
        congress: u32,
        law_type: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<LawItem>> {
        self.get_list(
            RequestBuilder::new("/law/{congress}/{lawType}")
                .path(congress)
                .path(law_type),
            options,
            "bills",
        )
    }

    /// A single law. `law_type` is sent lower-cased.
    pub fn get_law(
        &self,
        congress: u32,
        law_type: &str,
        law_number: u32,
    ) -> ApiResult<LawDetail> {
        self.get_one(
            RequestBuilder::new("/law/{congress}/{lawType}/{lawNumber}")
                .path(congress)
                .path(law_type.to_lowercase())
                .path(law_number),
            "bill",
        )
    }
}
