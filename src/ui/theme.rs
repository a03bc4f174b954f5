use crate::interpreter::instruction::Category;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color,     // Cyan for stack operations
    pub modified_cell: Color, // Cells rewritten by `p`
    pub visited_bg: Color,    // Cells executed at least once
    pub cursor_bg: Color,
}

impl Theme {
    /// Foreground colour for a cell of the given instruction category
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Flow => self.primary,
            Category::Literal => self.number,
            Category::Io => self.success,
            Category::Arithmetic => self.keyword,
            Category::Stack => self.type_name,
            Category::Memory => self.function,
            Category::Debug => self.error,
            Category::Blank => self.fg,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(203, 166, 247),        // Mauve for arithmetic
    string: Color::Rgb(250, 179, 135),         // Orange for string-mode text
    number: Color::Rgb(250, 179, 135),         // Orange for digits
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status bar
    function: Color::Rgb(249, 226, 175),       // Yellow for g/p
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for stack operations
    modified_cell: Color::Rgb(245, 194, 231),  // Pink for self-modified cells
    visited_bg: Color::Rgb(40, 40, 58),
    cursor_bg: Color::Rgb(249, 226, 175),
};
