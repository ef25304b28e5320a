use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::{
    Action, Amendment, Bill, BillDetail, BillSubjects, Committee, Cosponsor, RelatedBill, Summary,
    TextVersion, Title,
};

/// Builder for `/bill/{congress}/{billType}/{billNumber}` plus `suffix`.
fn bill(suffix: &str, congress: u32, bill_type: &str, bill_number: u32) -> RequestBuilder {
    RequestBuilder::new(format!("/bill/{{congress}}/{{billType}}/{{billNumber}}{suffix}"))
        .path(congress)
        .path(bill_type)
        .path(bill_number)
}

impl CongressClient {
    /// Bills across all congresses, most recently updated first.
    pub fn list_bills(&self, options: &ListOptions) -> ApiResult<Vec<Bill>> {
        self.get_list(RequestBuilder::new("/bill"), options, "bills")
    }

    pub fn list_bills_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Bill>> {
        self.get_list(
            RequestBuilder::new("/bill/{congress}").path(congress),
            options,
            "bills",
        )
    }

    /// Bills of one type (`hr`, `s`, `hjres`, ...) in a congress.
    pub fn list_bills_by_type(
        &self,
        congress: u32,
        bill_type: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<Bill>> {
        self.get_list(
            RequestBuilder::new("/bill/{congress}/{billType}")
                .path(congress)
                .path(bill_type),
            options,
            "bills",
        )
    }

    pub fn get_bill(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: u32,
    ) -> ApiResult<BillDetail> {
        self.get_one(bill("", congress, bill_type, bill_number), "bill")
    }

    pub fn get_bill_actions(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Action>> {
        self.get_list(
            bill("/actions", congress, bill_type, bill_number),
            options,
            "actions",
        )
    }

    pub fn get_bill_amendments(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Amendment>> {
        self.get_list(
            bill("/amendments", congress, bill_type, bill_number),
            options,
            "amendments",
        )
    }

    pub fn get_bill_committees(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Committee>> {
        self.get_list(
            bill("/committees", congress, bill_type, bill_number),
            options,
            "committees",
        )
    }

    pub fn get_bill_cosponsors(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Cosponsor>> {
        self.get_list(
            bill("/cosponsors", congress, bill_type, bill_number),
            options,
            "cosponsors",
        )
    }

    pub fn get_related_bills(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<RelatedBill>> {
        self.get_list(
            bill("/relatedbills", congress, bill_type, bill_number),
            options,
            "relatedBills",
        )
    }

    /// Legislative subjects and policy area. Unlike the other bill
    /// sub-resources this is a single object under `subjects`.
    pub fn get_bill_subjects(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: u32,
        options: &ListOptions,
    ) -> ApiResult<BillSubjects> {
        self.get_one(
            bill("/subjects", congress, bill_type, bill_number).list(options),
            "subjects",
        )
    }

    pub fn get_bill_summaries(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Summary>> {
        self.get_list(
            bill("/summaries", congress, bill_type, bill_number),
            options,
            "summaries",
        )
    }

    pub fn get_bill_text(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<TextVersion>> {
        self.get_list(
            bill("/text", congress, bill_type, bill_number),
            options,
            "textVersions",
        )
    }

    pub fn get_bill_titles(
        &self,
        congress: u32,
        bill_type: &str,
        bill_number: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Title>> {
        self.get_list(
            bill("/titles", congress, bill_type, bill_number),
            options,
            "titles",
        )
    }
}
