//! Operand stack pane rendering
//!
//! Values are listed top first. Each entry shows its depth, its integer value,
//! and the character it encodes when that character is printable.

use super::{border_style, clamp_scroll};
use crate::memory::stack::OperandStack;
use crate::memory::value::{is_printable, value_to_char_lossy, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

fn stack_entry(depth: usize, value: Value) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("[{:>3}] ", depth),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!("{:>12}", value),
            Style::default().fg(DEFAULT_THEME.number),
        ),
    ];

    if is_printable(value) {
        spans.push(Span::styled(
            format!("  '{}'", value_to_char_lossy(value)),
            Style::default().fg(DEFAULT_THEME.string),
        ));
    }

    if depth == 0 {
        spans.push(Span::styled(
            "  ◂ top",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

/// Render the operand stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    stack: &OperandStack,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Stack ({}) ", stack.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    if stack.is_empty() {
        let empty = List::new(vec![
            ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment))
        ])
        .block(block);
        *scroll_offset = 0;
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    clamp_scroll(scroll_offset, stack.len(), visible_height);

    let items: Vec<ListItem> = stack
        .iter()
        .rev()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(depth, &value)| ListItem::new(stack_entry(depth, value)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_entry_shows_character() {
        let line = stack_entry(0, 72);
        let rendered = text(&line);
        assert!(rendered.contains("72"));
        assert!(rendered.contains("'H'"));
        assert!(rendered.contains("top"));
    }

    #[test]
    fn test_entry_without_character() {
        let rendered = text(&stack_entry(3, -9));
        assert!(rendered.contains("-9"));
        assert!(!rendered.contains('\''));
        assert!(!rendered.contains("top"));
    }
}
