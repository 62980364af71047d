// src/config/state.rs
use super::options::AppOptions;
use crate::data::ListTab;

/// Per-session view state (what the user picked, not what was loaded).
#[derive(Clone, Debug)]
pub struct GuiState {
    /// Which list the left panel shows
    pub tab: ListTab,

    /// Team-name filter text
    pub search: String,

    /// Match highlighted in the list
    pub selected_match_id: Option<String>,

    /// Match whose analysis panel is open ("Quick preview" pins it)
    pub active_preview_id: Option<String>,

    /// Upload/options section expanded
    pub show_options: bool,

    /// Panel → show the raw analysis JSON
    pub show_raw_json: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            tab: ListTab::Upcoming,
            search: s!(),
            selected_match_id: None,
            active_preview_id: None,
            show_options: false,
            show_raw_json: false,
            window_w: 1280,
            window_h: 800,
        }
    }
}

impl GuiState {
    /// "Quick preview": pin the selected match. Returns false when nothing is selected.
    pub fn pin_selected(&mut self) -> bool {
        match &self.selected_match_id {
            Some(id) => {
                self.active_preview_id = Some(id.clone());
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_requires_a_selection() {
        let mut g = GuiState::default();
        assert!(!g.pin_selected());
        assert_eq!(g.active_preview_id, None);

        g.selected_match_id = Some(s!("42"));
        assert!(g.pin_selected());
        assert_eq!(g.active_preview_id.as_deref(), Some("42"));
    }
}
