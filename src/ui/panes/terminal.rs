//! Terminal output pane rendering

use super::{border_style, clamp_scroll};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Split program output into display lines
///
/// A trailing newline does not produce an empty last line.
pub fn output_lines(output: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = output.split('\n').collect();
    if lines.last().is_some_and(|s| s.is_empty()) {
        lines.pop();
    }
    lines
}

/// Render the terminal output pane
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    output: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Terminal Output ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines = output_lines(output);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
    } else {
        let block = block.padding(Padding::new(1, 0, 0, 0));

        // Calculate visible range for scrolling
        let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
        clamp_scroll(scroll_offset, lines.len(), visible_height);

        // Take only visible items
        let visible_items: Vec<ListItem> = lines
            .iter()
            .skip(*scroll_offset)
            .take(visible_height)
            .map(|line| ListItem::new(*line).style(Style::default().fg(DEFAULT_THEME.fg)))
            .collect();

        let list = List::new(visible_items).block(block);
        frame.render_widget(list, area);
    }
}
