use serde::{Deserialize, Serialize};

/// Sentinel for fields the page did not provide.
pub const NOT_SPECIFIED: &str = "Not specified";

/// One extracted job/recruitment record. Field renames double as the
/// CSV header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Post/Publish Date")]
    pub post_date: String,
    #[serde(rename = "Link to Detailed Job Page")]
    pub link: String,
}
