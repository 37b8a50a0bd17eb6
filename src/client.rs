use serde::{Deserialize, Serialize};

use crate::models::Vacancy;
use crate::Result;

pub const HH_API_BASE_URL: &str = "https://api.hh.ru/vacancies";

// The API rejects requests without a User-Agent.
const USER_AGENT: &str = "hh-vacancies/0.1";

/// Query parameters for one page of one time window. One instance per
/// (window, page) pair; serialized verbatim into the query string.
#[derive(Debug, Clone, Serialize)]
pub struct VacancyQuery {
    pub specialization: u32,
    pub date_from: String,
    pub date_to: String,
    pub per_page: u32,
    pub page: u32,
}

#[derive(Debug, Deserialize)]
struct VacancyPage {
    items: Vec<Vacancy>,
}

/// Anything that can serve pages of vacancy listings. The pipeline only
/// talks to this trait, so tests can swap the HTTP client out.
pub trait VacancySource: Sync {
    fn fetch_page(&self, query: &VacancyQuery) -> Result<Vec<Vacancy>>;
}

pub struct HhClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl HhClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(HH_API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            // No deadline: a stalled page stalls the whole run.
            .timeout(None)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }
}

impl VacancySource for HhClient {
    /// One GET per invocation, no retries. Transport failures, a non-JSON
    /// body, and a body without `items` all propagate to the caller.
    fn fetch_page(&self, query: &VacancyQuery) -> Result<Vec<Vacancy>> {
        let body = self.http.get(&self.base_url).query(query).send()?.text()?;
        let page: VacancyPage = serde_json::from_str(&body)?;
        Ok(page.items)
    }
}
