//! Live Hubstaff API client.
//!
//! Construction is a two-step bootstrap:
//!
//! 1. **Login**: [`AuthSession::login`] exchanges email/password for an auth token
//! 2. **Organization**: [`AuthSession::organization_id`] resolves the configured
//!    organization name to its id
//!
//! The resulting [`HubstaffClient`] is bound to that organization and serves
//! the two paged report queries through [`PageSource`].
//!
//! ## Request Conventions
//!
//! Every request carries the `app_token` query parameter and, once logged in,
//! the `AuthToken` header. Activity queries pass the reporting window in the
//! `DateStart`/`DateStop` headers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hsutil::api::{HubstaffClient, PageSource};
//!
//! let client = HubstaffClient::connect(&config, &password).await?;
//! let projects = client.list_projects().collect_all().await?;
//! ```

use super::models::{EntityId, LoginResponse, OrganizationsResponse};
use super::{PageQuery, PageSource, PAGE_START_PARAM};
use crate::libs::config::HubstaffConfig;
use crate::libs::error::{HubstaffError, Result};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Per-call timeout for every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const LOGIN_PATH: &str = "user/login";
const ORGANIZATIONS_PATH: &str = "groups";
const APP_TOKEN_PARAM: &str = "app_token";
const AUTH_TOKEN_HEADER: &str = "AuthToken";
const DATE_START_HEADER: &str = "DateStart";
const DATE_STOP_HEADER: &str = "DateStop";

/// Immutable description of one request, minus session credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub method: Method,
    /// Path relative to the versioned API root.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
}

impl PageRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            headers: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Copy of this request continuing at `page_start_id`, if any.
    pub fn with_page_start(&self, page_start_id: Option<&str>) -> Self {
        let mut request = self.clone();
        request.params.retain(|(name, _)| name != PAGE_START_PARAM);
        if let Some(token) = page_start_id {
            request.params.push((PAGE_START_PARAM.to_string(), token.to_string()));
        }
        request
    }
}

/// Authenticated HTTP session against one API root.
#[derive(Debug, Clone)]
pub struct AuthSession {
    client: Client,
    api_url: String,
    app_token: String,
    auth_token: String,
}

impl AuthSession {
    /// Logs in and keeps the returned auth token for every later request.
    #[instrument(skip_all, fields(email = %config.email))]
    pub async fn login(config: &HubstaffConfig, password: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let api_url = config.api_url();
        let url = format!("{}/{}", api_url, LOGIN_PATH);

        info!("generating auth token");
        let response = client
            .post(&url)
            .query(&[(APP_TOKEN_PARAM, config.app_token.as_str())])
            .form(&[("email", config.email.as_str()), ("password", password)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HubstaffError::Api {
                status,
                path: LOGIN_PATH.to_string(),
            });
        }
        let login: LoginResponse = response.json().await?;
        info!("auth token generated");

        Ok(Self {
            client,
            api_url,
            app_token: config.app_token.clone(),
            auth_token: login.auth_token,
        })
    }

    /// Resolves an organization name to its id.
    #[instrument(skip(self))]
    pub async fn organization_id(&self, name: &str) -> Result<EntityId> {
        let response: OrganizationsResponse = self.send_json(&PageRequest::get(ORGANIZATIONS_PATH)).await?;
        response
            .organizations
            .into_iter()
            .find(|organization| organization.name == name)
            .map(|organization| organization.id)
            .ok_or_else(|| HubstaffError::Configuration(format!("Organization {} was not found", name)))
    }

    /// Sends a request with session credentials and decodes the JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: &PageRequest) -> Result<T> {
        let url = format!("{}/{}", self.api_url, request.path);
        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .query(&[(APP_TOKEN_PARAM, self.app_token.as_str())])
            .query(&request.params)
            .header(AUTH_TOKEN_HEADER, &self.auth_token);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        debug!(path = %request.path, params = ?request.params, "sending request");
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HubstaffError::Api {
                status,
                path: request.path.clone(),
            });
        }
        Ok(response.json().await?)
    }
}

/// Hubstaff client bound to one organization.
#[derive(Debug, Clone)]
pub struct HubstaffClient {
    session: AuthSession,
    org_id: EntityId,
    page_limit: u32,
    max_pages: Option<usize>,
}

impl HubstaffClient {
    pub fn new(session: AuthSession, org_id: EntityId, page_limit: u32, max_pages: Option<usize>) -> Self {
        Self {
            session,
            org_id,
            page_limit,
            max_pages,
        }
    }

    /// Logs in and resolves `config.org_name`.
    pub async fn connect(config: &HubstaffConfig, password: &str) -> Result<Self> {
        let session = AuthSession::login(config, password).await?;
        let org_id = session.organization_id(&config.org_name).await?;
        info!(org_id = %org_id, "organization resolved");
        Ok(Self::new(session, org_id, config.page_limit, config.max_pages))
    }

    /// The request template for the first page of `query`.
    pub fn page_request(&self, query: &PageQuery) -> PageRequest {
        page_request(&self.org_id, self.page_limit, query)
    }
}

/// Builds the request template for `query` within organization `org_id`.
pub fn page_request(org_id: &EntityId, page_limit: u32, query: &PageQuery) -> PageRequest {
    match query {
        PageQuery::Projects => {
            PageRequest::get(format!("groups/{}/tasks", org_id)).param("page_limit", page_limit.to_string())
        }
        PageQuery::ProjectActivity {
            project_id,
            window,
            extra_params,
        } => {
            let mut request = PageRequest::get(format!("tasks/{}/actions/day", project_id))
                .header(DATE_START_HEADER, window.start.as_str())
                .header(DATE_STOP_HEADER, window.end.as_str())
                .param("page_limit", page_limit.to_string());
            for (name, value) in extra_params {
                request.params.retain(|(existing, _)| existing != name);
                request = request.param(name.as_str(), value.as_str());
            }
            request
        }
    }
}

impl PageSource for HubstaffClient {
    async fn fetch_page(&self, query: &PageQuery, page_start_id: Option<&str>) -> Result<serde_json::Value> {
        let request = self.page_request(query).with_page_start(page_start_id);
        self.session.send_json(&request).await
    }

    fn max_pages(&self) -> Option<usize> {
        self.max_pages
    }
}
