use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::{CrsReport, CrsReportDetail};

impl CongressClient {
    pub fn list_crs_reports(&self, options: &ListOptions) -> ApiResult<Vec<CrsReport>> {
        self.get_list(RequestBuilder::new("/crsreport"), options, "CRSReports")
    }

    /// A report by number, e.g. `R47175`.
    pub fn get_crs_report(&self, report_number: &str) -> ApiResult<CrsReportDetail> {
        self.get_one(
            RequestBuilder::new("/crsreport/{reportNumber}").path(report_number),
            "CRSReport",
        )
    }
}
