//! One method per congress.gov endpoint.
//!
//! Each method only names its path template, positional values, query
//! options, wrapper key and entity type; everything else is the shared
//! pipeline in [`CongressClient`]. List methods return exactly one page as
//! selected by `ListOptions` and never follow `pagination.next`.

use serde::de::DeserializeOwned;

use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};

mod amendments;
mod bills;
mod committee_prints;
mod committee_reports;
mod committees;
mod congress;
mod congressional_record;
mod crs_reports;
mod hearings;
mod house_votes;
mod laws;
mod members;
mod nominations;
mod summaries;
mod treaties;

impl CongressClient {
    fn get_one<T: DeserializeOwned>(&self, request: RequestBuilder, key: &str) -> ApiResult<T> {
        self.fetch_one(&request.build()?, key)
    }

    fn get_list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        options: &ListOptions,
        key: &str,
    ) -> ApiResult<Vec<T>> {
        self.fetch_many(&request.list(options).build()?, key)
    }
}
