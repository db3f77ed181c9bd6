//! Dense project-by-employee matrix of tracked seconds.

use crate::api::models::{EntityId, Project, User};
use serde::Serialize;
use std::collections::HashMap;

/// Which employee attribute labels a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EmployeeRef {
    Id,
    #[default]
    Name,
    Email,
}

impl EmployeeRef {
    /// Label for `user_id`, falling back to the raw id when the directory
    /// has no entry or the attribute is missing.
    pub fn label(&self, user_id: &EntityId, user: Option<&User>) -> String {
        let value = match (self, user) {
            (EmployeeRef::Id, _) => None,
            (EmployeeRef::Name, Some(user)) => user.name.clone(),
            (EmployeeRef::Email, Some(user)) => user.email.clone(),
            (_, None) => None,
        };
        value.unwrap_or_else(|| user_id.to_string())
    }
}

/// Which project attribute labels a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ProjectRef {
    Id,
    #[default]
    Name,
}

impl ProjectRef {
    pub fn label(&self, project: &Project) -> String {
        match self {
            ProjectRef::Id => project.id.to_string(),
            ProjectRef::Name => project.name.clone().unwrap_or_else(|| project.id.to_string()),
        }
    }
}

/// Running totals keyed by id, iterated in first-insertion order.
///
/// Taking a key only drops its total; `keys` keeps the stale entry and
/// [`OrderedTotals::drain`] skips it. A key added again after being taken
/// keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct OrderedTotals {
    keys: Vec<EntityId>,
    totals: HashMap<EntityId, u64>,
}

impl OrderedTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `seconds` to `key`, inserting it at zero on first sight.
    pub fn add(&mut self, key: &EntityId, seconds: u64) {
        let total = self.totals.entry(key.clone()).or_insert_with(|| {
            self.keys.push(key.clone());
            0
        });
        *total += seconds;
    }

    /// Removes `key` and returns its total.
    pub fn take(&mut self, key: &EntityId) -> Option<u64> {
        self.totals.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Drains the remaining entries in insertion order.
    pub fn drain(&mut self) -> Vec<(EntityId, u64)> {
        let keys = std::mem::take(&mut self.keys);
        keys.into_iter()
            .filter_map(|key| self.totals.remove(&key).map(|total| (key, total)))
            .collect()
    }
}

/// Seconds tracked per project (rows) and employee (columns).
///
/// Every row always has one cell per column; columns added after a row
/// was written are zero in that row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultMatrix {
    pub projects: Vec<String>,
    pub employees: Vec<String>,
    pub cells: Vec<Vec<u64>>,
    #[serde(skip)]
    column_ids: Vec<EntityId>,
}

impl ResultMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.projects.len()
    }

    pub fn columns(&self) -> usize {
        self.employees.len()
    }

    /// Appends one project row from its per-employee totals.
    ///
    /// Existing columns take their value from `totals` (or zero); whatever
    /// remains opens new columns in the order it was first seen, labelled by
    /// `employee_label`.
    pub fn push_row<F>(&mut self, project_label: String, mut totals: OrderedTotals, mut employee_label: F)
    where
        F: FnMut(&EntityId) -> String,
    {
        let mut row: Vec<u64> = self.column_ids.iter().map(|id| totals.take(id).unwrap_or(0)).collect();

        for (user_id, seconds) in totals.drain() {
            for earlier in self.cells.iter_mut() {
                earlier.push(0);
            }
            self.employees.push(employee_label(&user_id));
            self.column_ids.push(user_id);
            row.push(seconds);
        }

        self.cells.push(row);
        self.projects.push(project_label);
    }

    /// Same matrix with every cell passed through `convert`.
    pub fn map_cells<F: Fn(u64) -> u64>(&self, convert: F) -> Self {
        Self {
            cells: self.cells.iter().map(|row| row.iter().map(|&c| convert(c)).collect()).collect(),
            ..self.clone()
        }
    }
}
