use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::DailyCongressionalRecord;

impl CongressClient {
    pub fn list_daily_congressional_records(
        &self,
        options: &ListOptions,
    ) -> ApiResult<Vec<DailyCongressionalRecord>> {
        self.get_list(
            RequestBuilder::new("/daily-congressional-record"),
            options,
            "dailyCongressionalRecord",
        )
    }
}
