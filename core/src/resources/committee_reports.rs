use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::{CommitteeReportDetail, CommitteeReportItem, CommitteeReportText};

impl CongressClient {
    pub fn list_committee_reports(
        &self,
        options: &ListOptions,
    ) -> ApiResult<Vec<CommitteeReportItem>> {
        self.get_list(RequestBuilder::new("/committee-report"), options, "reports")
    }

    pub fn list_committee_reports_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<CommitteeReportItem>> {
        self.get_list(
            RequestBuilder::new("/committee-report/{congress}").path(congress),
            options,
            "reports",
        )
    }

    /// Reports of one type: `hrpt`, `srpt` or `erpt`.
    pub fn list_committee_reports_by_type(
        &self,
        congress: u32,
        report_type: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<CommitteeReportItem>> {
        self.get_list(
            RequestBuilder::new("/committee-report/{congress}/{reportType}")
                .path(congress)
                .path(report_type),
            options,
            "reports",
        )
    }

    pub fn get_committee_report(
        &self,
        congress: u32,
        report_type: &str,
        report_number: u32,
    ) -> ApiResult<CommitteeReportDetail> {
        self.get_one(
            RequestBuilder::new("/committee-report/{congress}/{reportType}/{reportNumber}")
                .path(congress)
                .path(report_type)
                .path(report_number),
            "report",
        )
    }

    pub fn get_committee_report_text(
        &self,
        congress: u32,
        report_type: &str,
        report_number: u32,
    ) -> ApiResult<Vec<CommitteeReportText>> {
        self.get_list(
            RequestBuilder::new("/committee-report/{congress}/{reportType}/{reportNumber}/text")
                .path(congress)
                .path(report_type)
                .path(report_number),
            &ListOptions::new(),
            "text",
        )
    }
}
