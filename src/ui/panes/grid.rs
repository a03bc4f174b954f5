//! Program grid pane rendering
//!
//! Draws the grid cell by cell:
//!
//! - Instruction cells are coloured by category (flow, literal, I/O, ...)
//! - The cell under the cursor is drawn inverted
//! - Cells already executed at the shown point in history get a tinted background
//! - Cells rewritten by `p` are shown in their own colour, underlined
//!
//! When the pane is smaller than the grid the viewport follows the cursor.

use super::border_style;
use crate::interpreter::cursor::Cursor;
use crate::interpreter::engine::{CellProfile, Mode};
use crate::interpreter::instruction::Instruction;
use crate::memory::grid::{Position, ProgramGrid};
use crate::memory::value::{is_printable, value_to_char_lossy};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Data needed to render the grid pane
pub struct GridRenderData<'a> {
    pub grid: &'a ProgramGrid,
    pub original_grid: &'a ProgramGrid,
    pub cursor: Cursor,
    pub mode: Mode,
    pub profile: &'a FxHashMap<Position, CellProfile>,
    /// Steps executed at the shown point in history
    pub steps: usize,
}

/// First visible index so that `cursor` stays inside a window of `visible` cells
pub fn viewport_offset(cursor: usize, extent: usize, visible: usize) -> usize {
    if visible >= extent {
        return 0;
    }
    cursor.saturating_sub(visible / 2).min(extent - visible)
}

fn cell_span(data: &GridRenderData, pos: Position) -> Span<'static> {
    let value = data.grid.at(pos);
    let glyph = if is_printable(value) {
        value_to_char_lossy(value)
    } else {
        '·'
    };

    let mut style = if data.mode == Mode::String {
        Style::default().fg(DEFAULT_THEME.string)
    } else {
        let category = Instruction::decode(value).category();
        Style::default().fg(DEFAULT_THEME.category_color(category))
    };

    if !is_printable(value) {
        style = style.fg(DEFAULT_THEME.comment);
    }

    if value != data.original_grid.at(pos) {
        style = style
            .fg(DEFAULT_THEME.modified_cell)
            .add_modifier(Modifier::UNDERLINED);
    }

    if data
        .profile
        .get(&pos)
        .is_some_and(|p| p.first_step <= data.steps)
    {
        style = style.bg(DEFAULT_THEME.visited_bg);
    }

    if pos == data.cursor.position {
        style = style
            .bg(DEFAULT_THEME.cursor_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }

    Span::styled(glyph.to_string(), style)
}

/// Render the program grid pane
pub fn render_grid_pane(frame: &mut Frame, area: Rect, data: GridRenderData, is_focused: bool) {
    let Position { x, y } = data.cursor.position;
    let modified = data.grid.diff(data.original_grid).count();
    let title = format!(
        " Program ({}, {}) {}{}{} ",
        x,
        y,
        data.cursor.direction.arrow(),
        if data.mode == Mode::String { " \"STRING\"" } else { "" },
        if modified > 0 {
            format!(" [{} modified]", modified)
        } else {
            String::new()
        }
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let visible_width = area.width.saturating_sub(2) as usize;
    let visible_height = area.height.saturating_sub(2) as usize;

    let x_offset = viewport_offset(x, data.grid.width(), visible_width);
    let y_offset = viewport_offset(y, data.grid.height(), visible_height);

    let x_end = (x_offset + visible_width).min(data.grid.width());
    let y_end = (y_offset + visible_height).min(data.grid.height());

    let lines: Vec<Line> = (y_offset..y_end)
        .map(|row| {
            let spans: Vec<Span> = (x_offset..x_end)
                .map(|col| cell_span(&data, Position::new(col, row)))
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
