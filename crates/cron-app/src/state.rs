//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use cron_core::prelude::*;
use serde::Serialize;

use crate::analysis::AnalysisView;
use crate::config::{Settings, SettingsTab};
use crate::confirm_dialog::ConfirmDialogState;
use crate::dashboard::DashboardState;
use crate::new_project::NewProjectForm;
use crate::notifications::Notifications;
use crate::route::Route;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    /// Page for the current route
    #[default]
    Normal,
    /// New project modal over the dashboard
    NewProjectDialog,
    /// Quit confirmation modal
    ConfirmDialog,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// View state of the settings page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsViewState {
    pub active_tab: SettingsTab,
    pub selected_index: usize,
    /// Unsaved changes
    pub dirty: bool,
    pub saving: bool,
}

impl SettingsViewState {
    /// Back to the first row of the first tab.
    pub fn reset_cursor(&mut self) {
        self.active_tab = SettingsTab::default();
        self.selected_index = 0;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
        self.selected_index = 0;
    }

    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
        self.selected_index = 0;
    }

    pub fn select_next(&mut self, item_count: usize) {
        if item_count > 0 {
            self.selected_index = (self.selected_index + 1) % item_count;
        }
    }

    pub fn select_previous(&mut self, item_count: usize) {
        if item_count > 0 {
            self.selected_index = self
                .selected_index
                .checked_sub(1)
                .unwrap_or(item_count - 1);
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Serialize)]
pub struct AppState {
    pub route: Route,
    pub ui_mode: UiMode,
    pub phase: AppPhase,

    pub settings: Settings,
    pub config_dir: PathBuf,

    pub dashboard: DashboardState,
    /// Present only while the analysis route is mounted
    pub analysis: Option<AnalysisView>,
    pub settings_view: SettingsViewState,
    pub new_project: NewProjectForm,

    #[serde(skip)]
    pub toasts: Notifications,
    #[serde(skip)]
    pub confirm_dialog_state: Option<ConfirmDialogState>,
    /// Mode to restore when the confirm dialog is cancelled
    #[serde(skip)]
    mode_before_confirm: UiMode,

    /// Monotonic counter for analysis view mounts
    #[serde(skip)]
    next_mount_id: u64,
}

impl AppState {
    pub fn new(settings: Settings, config_dir: PathBuf) -> Self {
        Self {
            route: Route::Dashboard,
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            settings,
            config_dir,
            dashboard: DashboardState::seeded(),
            analysis: None,
            settings_view: SettingsViewState::default(),
            new_project: NewProjectForm::new(),
            toasts: Notifications::new(),
            confirm_dialog_state: None,
            mode_before_confirm: UiMode::Normal,
            next_mount_id: 0,
        }
    }

    /// Switch routes. Per-view state is rebuilt on every navigation; unsaved
    /// and in-flight settings flags survive it.
    pub fn navigate(&mut self, route: Route) {
        debug!("Navigate {} -> {}", self.route.path(), route.path());

        self.analysis = None;
        self.settings_view.reset_cursor();
        self.ui_mode = UiMode::Normal;

        match &route {
            Route::Analysis { project_id } => {
                self.next_mount_id += 1;
                let name = self.dashboard.project(project_id).map(|p| p.name.clone());
                self.analysis = Some(AnalysisView::new(self.next_mount_id, project_id, name));
            }
            Route::NotFound { path } => {
                error!("404 Error: User attempted to access non-existent route: {}", path);
            }
            Route::Dashboard | Route::Settings | Route::Help => {}
        }

        self.route = route;
    }

    pub fn show_new_project_dialog(&mut self) {
        self.ui_mode = UiMode::NewProjectDialog;
    }

    /// Close the new project dialog, even when it sits under the confirm dialog.
    pub fn hide_new_project_dialog(&mut self) {
        match self.ui_mode {
            UiMode::NewProjectDialog => self.ui_mode = UiMode::Normal,
            UiMode::ConfirmDialog => self.mode_before_confirm = UiMode::Normal,
            UiMode::Normal => {}
        }
    }

    /// Whether the new project dialog is on screen, possibly under the
    /// confirm dialog.
    pub fn new_project_dialog_visible(&self) -> bool {
        self.ui_mode == UiMode::NewProjectDialog
            || (self.ui_mode == UiMode::ConfirmDialog
                && self.mode_before_confirm == UiMode::NewProjectDialog)
    }

    /// Descriptions of simulated work still running.
    pub fn pending_tasks(&self) -> Vec<&'static str> {
        let mut pending = Vec::new();
        if self.analysis.as_ref().is_some_and(|a| a.editor.analyzing) {
            pending.push("Code analysis");
        }
        if self.new_project.submitting {
            pending.push("Project creation");
        }
        pending
    }

    /// Request to quit - shows confirmation if work is in flight
    pub fn request_quit(&mut self) {
        let pending = self.pending_tasks();
        if self.settings.behavior.confirm_quit && !pending.is_empty() {
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_confirmation(&pending));
            if self.ui_mode != UiMode::ConfirmDialog {
                self.mode_before_confirm = self.ui_mode;
            }
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn confirm_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.phase = AppPhase::Quitting;
    }

    /// Close the dialog and return to whatever was underneath
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = self.mode_before_confirm;
        self.mode_before_confirm = UiMode::Normal;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
