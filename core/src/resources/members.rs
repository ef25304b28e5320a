use crate::client::CongressClient;
use crate::error::ApiResult;
use crate::request::{ListOptions, RequestBuilder};
use crate::types::{Bill, Sponsor};

impl CongressClient {
    /// Members; narrow with `ListOptions::current_member`.
    pub fn list_members(&self, options: &ListOptions) -> ApiResult<Vec<Sponsor>> {
        self.get_list(RequestBuilder::new("/member"), options, "members")
    }

    pub fn get_member(&self, bioguide_id: &str) -> ApiResult<Sponsor> {
        self.get_one(
            RequestBuilder::new("/member/{bioguideId}").path(bioguide_id),
            "member",
        )
    }

    pub fn list_members_by_congress(
        &self,
        congress: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Sponsor>> {
        self.get_list(
            RequestBuilder::new("/member/congress/{congress}").path(congress),
            options,
            "members",
        )
    }

    pub fn get_member_sponsored_legislation(
        &self,
        bioguide_id: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<Bill>> {
        self.get_list(
            RequestBuilder::new("/member/{bioguideId}/sponsored-legislation").path(bioguide_id),
            options,
            "sponsoredLegislation",
        )
    }

    pub fn get_member_cosponsored_legislation(
        &self,
        bioguide_id: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<Bill>> {
        self.get_list(
            RequestBuilder::new("/member/{bioguideId}/cosponsored-legislation").path(bioguide_id),
            options,
            "cosponsoredLegislation",
        )
    }

    /// Members for a two-letter state code such as `MI`.
    pub fn list_members_by_state(
        &self,
        state_code: &str,
        options: &ListOptions,
    ) -> ApiResult<Vec<Sponsor>> {
        self.get_list(
            RequestBuilder::new("/member/{stateCode}").path(state_code),
            options,
            "members",
        )
    }

    pub fn list_members_by_state_district(
        &self,
        state_code: &str,
        district: u32,
        options: &ListOptions,
    ) -> ApiResult<Vec<Sponsor>> {
        self.get_list(
            RequestBuilder::new("/member/{stateCode}/{district}")
                .path(state_code)
                .path(district),
            options,
            "members",
        )
    }
}
