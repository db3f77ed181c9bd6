//! Fixture-backed page source used by `hsutil table --test`.
//!
//! The fixture file holds already-paged responses:
//!
//! ```json
//! {
//!   "projects": [ { "projects": [...] }, { "projects": [...] } ],
//!   "project_activity": {
//!     "1": [ { "daily_activities": [...], "users": [...] } ]
//!   }
//! }
//! ```
//!
//! Pages are served in file order. Continuation tokens are the index of the
//! next page, so the regular [`Pages`](super::Pages) cursor walks them
//! exactly like live responses. A project missing from `project_activity`
//! has no activity.

use super::{PageQuery, PageSource};
use crate::libs::error::{HubstaffError, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Fixture data shipped with the binary.
const BUNDLED_FIXTURE: &str = include_str!("../../fixtures/test_data.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureSource {
    #[serde(default)]
    projects: Vec<Value>,
    #[serde(default)]
    project_activity: HashMap<String, Vec<Value>>,
}

impl FixtureSource {
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_FIXTURE)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HubstaffError::Fixture(format!("{} does not exist", path.display())));
        }
        Self::from_json(&fs::read_to_string(path)?)
    }

    fn pages_for(&self, query: &PageQuery) -> &[Value] {
        match query {
            PageQuery::Projects => &self.projects,
            PageQuery::ProjectActivity { project_id, .. } => self
                .project_activity
                .get(project_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }
}

impl PageSource for FixtureSource {
    async fn fetch_page(&self, query: &PageQuery, page_start_id: Option<&str>) -> Result<Value> {
        let pages = self.pages_for(query);
        let index = match page_start_id {
            None => 0,
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| HubstaffError::Fixture(format!("invalid page token {:?}", token)))?,
        };
        debug!(?query, index, "serving fixture page");

        if pages.is_empty() && index == 0 {
            return Ok(json!({}));
        }
        let mut page = pages
            .get(index)
            .cloned()
            .ok_or_else(|| HubstaffError::Fixture(format!("no page at index {}", index)))?;

        let object = page
            .as_object_mut()
            .ok_or_else(|| HubstaffError::Fixture(format!("page {} is not a JSON object", index)))?;
        if index + 1 < pages.len() {
            object.insert("pagination".to_string(), json!({ "next_page_start_id": (index + 1).to_string() }));
        } else {
            object.remove("pagination");
        }
        Ok(page)
    }
}
