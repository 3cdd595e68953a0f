//! Navigable routes.
//!
//! Routes are addressed by URL-style paths, e.g. `--route /analysis/2`.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    #[default]
    Dashboard,
    Analysis { project_id: String },
    Settings,
    Help,
    /// Any path that matched nothing, kept for the 404 page.
    NotFound { path: String },
}

impl Route {
    /// Parse a path. Never fails: unknown paths become [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');

        match normalized {
            "" => Route::Dashboard,
            "/settings" => Route::Settings,
            "/help" => Route::Help,
            _ => match normalized.strip_prefix("/analysis/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Analysis {
                    project_id: id.to_string(),
                },
                _ => Route::NotFound {
                    path: trimmed.to_string(),
                },
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Analysis { project_id } => format!("/analysis/{project_id}"),
            Route::Settings => "/settings".to_string(),
            Route::Help => "/help".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Analysis { .. } => "Code Analysis",
            Route::Settings => "Settings",
            Route::Help => "Help & Support",
            Route::NotFound { .. } => "Not Found",
        }
    }
}
