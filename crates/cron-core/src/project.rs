//! Dashboard records: projects, recent activity and aggregate stats.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Analyzing,
    Completed,
    Error,
    Pending,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Analyzing => "analyzing",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Error => "error",
            ProjectStatus::Pending => "pending",
        }
    }
}

/// A project listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub path: String,
    /// Free-form label such as "2 hours ago" or "Never".
    pub last_analyzed: String,
    pub issues_found: u32,
    pub issues_fixed: u32,
    pub language: String,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// "fixed/found fixed", only meaningful for completed projects.
    pub fn fix_summary(&self) -> Option<String> {
        (self.status == ProjectStatus::Completed)
            .then(|| format!("{}/{} fixed", self.issues_fixed, self.issues_found))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Analysis,
    Fix,
    Optimization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }
}

/// An entry in the dashboard's recent activity feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub project: String,
    pub description: String,
    pub timestamp: String,
    pub impact: Impact,
}

/// Aggregates shown in the dashboard's stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub active_projects: usize,
    pub issues_found: u32,
    pub issues_fixed: u32,
    /// Percentage of found issues that were fixed, rounded to nearest.
    pub success_rate: u32,
}

impl DashboardStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let issues_found: u32 = projects.iter().map(|p| p.issues_found).sum();
        let issues_fixed: u32 = projects.iter().map(|p| p.issues_fixed).sum();
        let success_rate = if issues_found > 0 {
            (f64::from(issues_fixed) / f64::from(issues_found) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            active_projects: projects.len(),
            issues_found,
            issues_fixed,
            success_rate,
        }
    }
}
