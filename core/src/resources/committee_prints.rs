use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::{CommitteePrintDetail, CommitteePrintItem, CommitteePrintText};

impl CongressClient {
    pub fn list_committee_prints(
        &self,
        options: &ListOptions,
    ) -> ApiResult<Vec<CommitteePrintItem>> {
        self.get_list(
            RequestBuilder::new("/committee-print"),
            options,
            "committeePrints",
        )
    }

    pub fn list_committee_prints_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<CommitteePrintItem>> {
        self.get_list(
            RequestBuilder::new("/committee-print/{congress}").path(congress),
            options,
            "committeePrints",
        )
    }

    pub fn list_committee_prints_by_chamber(
        &self,
        congress: u32,
        chamber: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<CommitteePrintItem>> {
        self.get_list(
            RequestBuilder::new("/committee-print/{congress}/{chamber}")
                .path(congress)
                .path(chamber),
            options,
            "committeePrints",
        )
    }

    pub fn get_committee_print(
        &self,
        congress: u32,
        chamber: &str,
        jacket_number: u32,
    ) -> ApiResult<CommitteePrintDetail> {
        self.get_one(
            RequestBuilder::new("/committee-print/{congress}/{chamber}/{jacketNumber}")
                .path(congress)
                .path(chamber)
                .path(jacket_number),
            "committeePrint",
        )
    }

    pub fn get_committee_print_text(
        &self,
        congress: u32,
        chamber: &str,
        jacket_number: u32,
    ) -> ApiResult<Vec<CommitteePrintText>> {
        self.get_list(
            RequestBuilder::new("/committee-print/{congress}/{chamber}/{jacketNumber}/text")
                .path(congress)
                .path(chamber)
                .path(jacket_number),
            &ListOptions::new(),
            "text",
        )
    }
}
