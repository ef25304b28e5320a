//! Congressional Research Service reports.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsReportFormat {
    pub format: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsReportAuthor {
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsReportTopic {
    pub topic: Option<String>,
}

/// A bill or law referenced by a report. The URL key is upper-case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrsReportRelatedMaterial {
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub congress: Option<u32>,
    pub number: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub material_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrsReport {
    pub content_type: Option<String>,
    pub id: Option<String>,
    pub publish_date: Option<String>,
    pub status: Option<String>,
    pub title: Option<String>,
    pub update_date: Option<String>,
    pub url: Option<String>,
    pub version: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrsReportDetail {
    pub authors: Option<Vec<CrsReportAuthor>>,
    pub content_type: Option<String>,
    pub formats: Option<Vec<CrsReportFormat>>,
    pub id: Option<String>,
    pub publish_date: Option<String>,
    pub related_materials: Option<Vec<CrsReportRelatedMaterial>>,
    pub status: Option<String>,
    pub summary: Option<String>,
    pub title: Option<String>,
    pub topics: Option<Vec<CrsReportTopic>>,
    pub update_date: Option<String>,
    pub url: Option<String>,
    pub version: Option<u32>,
}
