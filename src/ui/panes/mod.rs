//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`grid`]: the 80×25 program grid with cursor, visited and self-modified cells
//! - [`stack`]: operand stack, top first, with character renderings
//! - [`terminal`]: program output up to the current point in history
//! - [`status`]: Status bar with keybindings and execution state
//!
//! Each pane module exports a primary `render_*()` function taking the frame,
//! its area, the data to show, and the pane's focus and scroll state.

pub mod grid;
pub mod stack;
pub mod status;
pub mod terminal;

pub use grid::render_grid_pane;
pub use stack::render_stack_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use terminal::render_terminal_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every pane
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *offset = (*offset).min(max_scroll);
    } else {
        *offset = 0;
    }
}
