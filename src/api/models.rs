//! Wire models for the Hubstaff paged envelopes.
//!
//! Every paged response shares the same shape: one entity list plus an
//! optional `pagination` object carrying `next_page_start_id`.
//!
//! ```json
//! {
//!   "daily_activities": [{ "user_id": 9, "tracked": 3600 }],
//!   "users": [{ "id": 9, "name": "Bob", "email": "b@x.com" }],
//!   "pagination": { "next_page_start_id": 1234 }
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ids and tokens arrive as either JSON numbers or strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Str(String),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Int(n) => n.to_string(),
            Scalar::Str(s) => s,
        }
    }
}

/// Opaque identifier of a project, user or organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Scalar", into = "String")]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Scalar> for EntityId {
    fn from(value: Scalar) -> Self {
        Self(value.into())
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Continuation token as handed out by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Scalar")]
pub struct PageToken(String);

impl From<Scalar> for PageToken {
    fn from(value: Scalar) -> Self {
        Self(value.into())
    }
}

impl PageToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next_page_start_id: Option<PageToken>,
}

/// A decoded page of any paged endpoint.
pub trait Page: DeserializeOwned {
    fn pagination(&self) -> Option<&Pagination>;

    /// The token for the following page. Absent and empty tokens both end the sequence.
    fn next_page_start_id(&self) -> Option<&str> {
        self.pagination()
            .and_then(|pagination| pagination.next_page_start_id.as_ref())
            .map(PageToken::as_str)
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: EntityId,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsPage {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl Page for ProjectsPage {
    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

/// An employee as embedded in activity pages with `include=users`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: EntityId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Time one user tracked on one project for one day.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyActivity {
    pub user_id: EntityId,
    #[serde(default)]
    pub project_id: Option<EntityId>,
    #[serde(default)]
    pub date: Option<String>,
    /// Seconds.
    #[serde(default)]
    pub tracked: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityPage {
    #[serde(default)]
    pub daily_activities: Vec<DailyActivity>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl Page for ActivityPage {
    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct OrganizationsResponse {
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub auth_token: String,
}
