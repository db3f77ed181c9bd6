//! Builds the project-by-employee matrix from the paged sources.
//!
//! Projects are walked in listing order, one at a time. For each project all
//! activity pages are drained and `tracked` seconds summed per user. Projects
//! without a single activity entry are left out entirely; the rest become a
//! row, opening new employee columns as they are first seen.

use crate::api::models::{EntityId, Project, User};
use crate::api::PageSource;
use crate::libs::error::Result;
use crate::libs::matrix::{EmployeeRef, OrderedTotals, ProjectRef, ResultMatrix};
use crate::libs::window::ReportWindow;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Query parameters asking activity pages to embed the user directory.
pub const INCLUDE_USERS: [(&str, &str); 1] = [("include", "users")];

/// Per-project tally: totals by user plus the users seen on its pages.
#[derive(Debug, Default)]
pub struct ProjectActivity {
    pub totals: OrderedTotals,
    pub directory: HashMap<EntityId, User>,
}

/// Drains every activity page of `project` within `window`.
pub async fn project_activity<S: PageSource>(
    source: &S,
    project: &Project,
    window: &ReportWindow,
) -> Result<ProjectActivity> {
    let mut activity = ProjectActivity::default();
    let mut pages = source.list_project_activity(&project.id, window, &INCLUDE_USERS);

    while let Some(page) = pages.next_page().await? {
        for user in page.users {
            activity.directory.insert(user.id.clone(), user);
        }
        for entry in &page.daily_activities {
            activity.totals.add(&entry.user_id, entry.tracked);
        }
    }

    Ok(activity)
}

/// Builds the full matrix for `window`.
///
/// Projects are visited in listing order and each one's activity is fully
/// drained before the next project is requested.
///
/// # Arguments
///
/// * `source` - Where pages come from, live or fixture
/// * `window` - Time frame the activity is restricted to
/// * `employee_ref` - Attribute used as column label
/// * `project_ref` - Attribute used as row label
///
/// # Returns
///
/// Returns the matrix with one row per project that has activity. Any source
/// error aborts the run; no partial matrix is returned.
#[instrument(skip(source), fields(start = %window.start, end = %window.end))]
pub async fn build<S: PageSource>(
    source: &S,
    window: &ReportWindow,
    employee_ref: EmployeeRef,
    project_ref: ProjectRef,
) -> Result<ResultMatrix> {
    let mut matrix = ResultMatrix::new();
    let mut projects = source.list_projects();

    while let Some(page) = projects.next_page().await? {
        for project in &page.projects {
            let activity = project_activity(source, project, window).await?;
            if activity.totals.is_empty() {
                debug!(project_id = %project.id, "no activity in window, skipping project");
                continue;
            }

            debug!(project_id = %project.id, employees = activity.totals.len(), "adding project row");
            let directory = activity.directory;
            matrix.push_row(project_ref.label(project), activity.totals, |user_id| {
                employee_ref.label(user_id, directory.get(user_id))
            });
        }
    }

    info!(rows = matrix.rows(), columns = matrix.columns(), "matrix built");
    Ok(matrix)
}
