// src/config/state.rs
use super::options::AppOptions;

/// Which central view the GUI is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Cards,
    Table,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub view: ViewKind,
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            view: ViewKind::Cards,
            window_w: 1000,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
