use std::path::PathBuf;
use std::time::Duration;

/// URLs tried in order; later entries are fallbacks for the same site.
pub const DEFAULT_URLS: &[&str] = &[
    "https://www.ibps.in/",
    "https://www.ibps.in/careers/",
    "https://www.ibps.in/recruitment/",
];

pub const DEFAULT_OUTPUT: &str = "ibps_job_listings.csv";

/// Titles containing any of these are navigation noise, not jobs.
pub const DEFAULT_EXCLUDE_TITLES: &[&str] = &[
    "view all",
    "more",
    "home",
    "back",
    "contact us",
    "recruitment exams",
    "personnel selection services",
];

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Immutable run configuration, built once at startup and passed
/// explicitly to each stage.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub urls: Vec<String>,
    pub output: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
    pub exclude_titles: Vec<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_URLS.iter().map(|s| s.to_string()).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            exclude_titles: DEFAULT_EXCLUDE_TITLES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
