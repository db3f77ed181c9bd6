//! Paged data sources for the report.
//!
//! The aggregator never talks HTTP directly. It pulls pages from a
//! [`PageSource`], which has two implementations selected when the command
//! starts:
//!
//! - **Live**: [`HubstaffClient`], an authenticated client bound to one organization
//! - **Fixture**: [`FixtureSource`], canned pages loaded from a JSON file for `--test`
//!
//! Both only answer "give me the page for this query starting at this token".
//! Following continuation tokens is done once, here, by [`Pages`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hsutil::api::{FixtureSource, PageSource};
//!
//! let source = FixtureSource::bundled()?;
//! let mut pages = source.list_projects();
//! while let Some(page) = pages.next_page().await? {
//!     for project in page.projects {
//!         println!("{}", project.id);
//!     }
//! }
//! ```

use crate::libs::error::{HubstaffError, Result};
use crate::libs::window::ReportWindow;
use std::marker::PhantomData;
use tracing::debug;

pub mod fixture;
pub mod hubstaff;
pub mod models;

pub use fixture::FixtureSource;
pub use hubstaff::{AuthSession, HubstaffClient, PageRequest};
pub use models::{ActivityPage, EntityId, Page, ProjectsPage};

/// Query parameter carrying the continuation token on follow-up requests.
pub const PAGE_START_PARAM: &str = "page_start_id";

/// Default hop cap for a single page sequence.
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// What a page sequence is listing. Sources turn this into a concrete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageQuery {
    /// Projects of the bound organization.
    Projects,
    /// Daily activity of one project inside a reporting window.
    ProjectActivity {
        project_id: EntityId,
        window: ReportWindow,
        extra_params: Vec<(String, String)>,
    },
}

/// Capability to fetch single pages of the two report queries.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetches one raw page body.
    ///
    /// `page_start_id` is `None` for the first page and the previous page's
    /// continuation token afterwards.
    async fn fetch_page(&self, query: &PageQuery, page_start_id: Option<&str>) -> Result<serde_json::Value>;

    /// Hop cap applied to every sequence built from this source.
    fn max_pages(&self) -> Option<usize> {
        Some(DEFAULT_MAX_PAGES)
    }

    /// Lazy page sequence for an arbitrary query.
    fn fetch_pages<T: Page>(&self, query: PageQuery) -> Pages<'_, Self, T>
    where
        Self: Sized,
    {
        Pages::new(self, query, self.max_pages())
    }

    fn list_projects(&self) -> Pages<'_, Self, ProjectsPage>
    where
        Self: Sized,
    {
        self.fetch_pages(PageQuery::Projects)
    }

    /// `extra_params` lets callers ask for embedded data, e.g. `include=users`.
    fn list_project_activity(
        &self,
        project_id: &EntityId,
        window: &ReportWindow,
        extra_params: &[(&str, &str)],
    ) -> Pages<'_, Self, ActivityPage>
    where
        Self: Sized,
    {
        self.fetch_pages(PageQuery::ProjectActivity {
            project_id: project_id.clone(),
            window: window.clone(),
            extra_params: extra_params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        })
    }
}

/// Pull-based cursor over a paged query.
///
/// Each call to [`Pages::next_page`] issues at most one request. The cursor
/// ends when a page carries no (or an empty) continuation token, and fails
/// with [`HubstaffError::PageLimitExceeded`] when the server keeps handing
/// out tokens beyond `max_pages`.
pub struct Pages<'a, S, T> {
    source: &'a S,
    query: PageQuery,
    next_start: Option<String>,
    fetched: usize,
    max_pages: Option<usize>,
    finished: bool,
    _page: PhantomData<T>,
}

impl<'a, S: PageSource, T: Page> Pages<'a, S, T> {
    pub fn new(source: &'a S, query: PageQuery, max_pages: Option<usize>) -> Self {
        Self {
            source,
            query,
            next_start: None,
            fetched: 0,
            max_pages,
            finished: false,
            _page: PhantomData,
        }
    }

    pub async fn next_page(&mut self) -> Result<Option<T>> {
        if self.finished {
            return Ok(None);
        }
        if let Some(max_pages) = self.max_pages {
            if self.fetched >= max_pages {
                self.finished = true;
                return Err(HubstaffError::PageLimitExceeded { max_pages });
            }
        }

        let body = self.source.fetch_page(&self.query, self.next_start.as_deref()).await?;
        self.fetched += 1;
        let page: T = serde_json::from_value(body)?;

        match page.next_page_start_id() {
            Some(token) => {
                debug!(hop = self.fetched, token, "continuing pagination");
                self.next_start = Some(token.to_string());
            }
            None => {
                debug!(pages = self.fetched, "pagination finished");
                self.next_start = None;
                self.finished = true;
            }
        }

        Ok(Some(page))
    }

    /// Drains the sequence into memory.
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut pages = Vec::new();
        while let Some(page) = self.next_page().await? {
            pages.push(page);
        }
        Ok(pages)
    }
}
