//! Message types for the application (TEA pattern)

use cron_core::{CategoryFilter, Project};

use crate::input_key::InputKey;
use crate::route::Route;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Periodic tick for spinners and toast expiry
    Tick,

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Force quit, no confirmation
    Quit,
    /// Quit, asking first if simulated work is in flight
    RequestQuit,
    ConfirmQuit,
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Navigation / header
    // ─────────────────────────────────────────────────────────
    Navigate(Route),
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────
    DashboardUp,
    DashboardDown,
    OpenSelectedProject,

    // ─────────────────────────────────────────────────────────
    // New Project Dialog
    // ─────────────────────────────────────────────────────────
    OpenNewProjectDialog,
    CloseNewProjectDialog,
    NewProjectNextField,
    NewProjectPrevField,
    NewProjectInput(char),
    NewProjectBackspace,
    NewProjectCycleLanguage { forward: bool },
    NewProjectBrowse,
    SubmitNewProject,
    /// Simulated creation finished
    ProjectCreated { project: Box<Project> },

    // ─────────────────────────────────────────────────────────
    // Analysis view
    // ─────────────────────────────────────────────────────────
    CycleFocus { forward: bool },
    ToggleTreePanel,
    ToggleSuggestionsPanel,
    TreeUp,
    TreeDown,
    TreeFirst,
    TreeLast,
    /// Folder toggles, file selects
    ActivateTreeRow,
    SelectFile { id: String },
    ToggleFolder { id: String },
    EditorScrollUp(usize),
    EditorScrollDown(usize),
    EditorTop,
    EditorBottom,
    AnalyzeCode,
    /// Simulated analysis timer fired for the view mounted as `mount_id`
    AnalysisCompleted { mount_id: u64 },

    // ─────────────────────────────────────────────────────────
    // Suggestions panel
    // ─────────────────────────────────────────────────────────
    SetSuggestionFilter(CategoryFilter),
    NextSuggestionTab,
    PrevSuggestionTab,
    SuggestionUp,
    SuggestionDown,
    ToggleSuggestion { id: String },
    ApplySuggestion { id: String },
    DismissSuggestion { id: String },

    // ─────────────────────────────────────────────────────────
    // Settings page
    // ─────────────────────────────────────────────────────────
    SettingsNextTab,
    SettingsPrevTab,
    SettingsUp,
    SettingsDown,
    SettingsToggleSelected,
    SaveSettings,
    /// Result of the background save; `error` is `None` on success
    SettingsSaved { error: Option<String> },
}
