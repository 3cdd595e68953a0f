//! Dashboard state: project list, activity feed and the project cursor.

use cron_core::mock;
use cron_core::prelude::*;
use cron_core::{Activity, DashboardStats, Project};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub projects: Vec<Project>,
    pub activity: Vec<Activity>,
    pub cursor: usize,
}

impl DashboardState {
    pub fn seeded() -> Self {
        Self {
            projects: mock::seed_projects(),
            activity: mock::seed_activity(),
            cursor: 0,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_projects(&self.projects)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.cursor)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.projects.len() {
            self.cursor += 1;
        }
    }

    /// Append a newly created project. Two projects may not share a path.
    pub fn add_project(&mut self, project: Project) -> Result<()> {
        if self.projects.iter().any(|p| p.path == project.path) {
            return Err(Error::duplicate_project(project.path));
        }
        info!("Added project '{}' ({})", project.name, project.id);
        self.projects.push(project);
        Ok(())
    }
}
