//! Instruction decoding
//!
//! Every cell value decodes to exactly one [`Instruction`]; anything outside
//! the instruction set decodes to [`Instruction::Nop`]. String mode is handled
//! by the engine before decoding, so this table only describes normal mode.

use super::cursor::Direction;
use crate::memory::value::{value_to_char, Value};

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
            ArithOp::Mul => '*',
            ArithOp::Div => '/',
            ArithOp::Mod => '%',
        }
    }
}

/// A decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    // Control flow
    Go(Direction),
    HorizontalIf,
    VerticalIf,
    Random,
    Bridge,
    Halt,

    // Literals
    Digit(u8),
    ToggleString,

    // I/O
    InputNumber,
    InputChar,
    OutputNumber,
    OutputChar,

    // Arithmetic and logic
    Arith(ArithOp),
    Greater,
    Not,

    // Stack manipulation
    Duplicate,
    Swap,
    Pop,

    // Grid access
    Get,
    Put,

    // Debug
    DumpGrid,

    Nop,
}

/// Coarse grouping used for colouring cells in the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Flow,
    Literal,
    Io,
    Arithmetic,
    Stack,
    Memory,
    Debug,
    Blank,
}

impl Instruction {
    /// Decode a cell value
    pub fn decode(value: Value) -> Instruction {
        let Some(c) = value_to_char(value) else {
            return Instruction::Nop;
        };

        match c {
            '>' => Instruction::Go(Direction::Right),
            '<' => Instruction::Go(Direction::Left),
            '^' => Instruction::Go(Direction::Up),
            'v' => Instruction::Go(Direction::Down),
            '_' => Instruction::HorizontalIf,
            '|' => Instruction::VerticalIf,
            '?' => Instruction::Random,
            '#' => Instruction::Bridge,
            '@' => Instruction::Halt,

            '0'..='9' => Instruction::Digit(c as u8 - b'0'),
            '"' => Instruction::ToggleString,

            '&' => Instruction::InputNumber,
            '~' => Instruction::InputChar,
            '.' => Instruction::OutputNumber,
            ',' => Instruction::OutputChar,

            '+' => Instruction::Arith(ArithOp::Add),
            '-' => Instruction::Arith(ArithOp::Sub),
            '*' => Instruction::Arith(ArithOp::Mul),
            '/' => Instruction::Arith(ArithOp::Div),
            '%' => Instruction::Arith(ArithOp::Mod),
            '`' => Instruction::Greater,
            '!' => Instruction::Not,

            ':' => Instruction::Duplicate,
            '\\' => Instruction::Swap,
            '$' => Instruction::Pop,

            'g' => Instruction::Get,
            'p' => Instruction::Put,

            '=' => Instruction::DumpGrid,

            _ => Instruction::Nop,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Instruction::Go(_)
            | Instruction::HorizontalIf
            | Instruction::VerticalIf
            | Instruction::Random
            | Instruction::Bridge
            | Instruction::Halt => Category::Flow,
            Instruction::Digit(_) | Instruction::ToggleString => Category::Literal,
            Instruction::InputNumber
            | Instruction::InputChar
            | Instruction::OutputNumber
            | Instruction::OutputChar => Category::Io,
            Instruction::Arith(_) | Instruction::Greater | Instruction::Not => {
                Category::Arithmetic
            }
            Instruction::Duplicate | Instruction::Swap | Instruction::Pop => Category::Stack,
            Instruction::Get | Instruction::Put => Category::Memory,
            Instruction::DumpGrid => Category::Debug,
            Instruction::Nop => Category::Blank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(c: char) -> Instruction {
        Instruction::decode(c as Value)
    }

    #[test]
    fn test_decode_directions() {
        assert_eq!(decode('>'), Instruction::Go(Direction::Right));
        assert_eq!(decode('<'), Instruction::Go(Direction::Left));
        assert_eq!(decode('^'), Instruction::Go(Direction::Up));
        assert_eq!(decode('v'), Instruction::Go(Direction::Down));
    }

    #[test]
    fn test_decode_digits() {
        for d in 0..=9u8 {
            assert_eq!(decode((b'0' + d) as char), Instruction::Digit(d));
        }
    }

    #[test]
    fn test_decode_arithmetic() {
        assert_eq!(decode('%'), Instruction::Arith(ArithOp::Mod));
        assert_eq!(decode('`'), Instruction::Greater);
        assert_eq!(decode('\\'), Instruction::Swap);
    }

    #[test]
    fn test_unknown_cells_are_nops() {
        assert_eq!(decode(' '), Instruction::Nop);
        assert_eq!(decode('V'), Instruction::Nop);
        assert_eq!(decode('é'), Instruction::Nop);
        assert_eq!(Instruction::decode(-1), Instruction::Nop);
        assert_eq!(Instruction::decode(0x11_0000), Instruction::Nop);
    }

    #[test]
    fn test_categories() {
        assert_eq!(decode('#').category(), Category::Flow);
        assert_eq!(decode('"').category(), Category::Literal);
        assert_eq!(decode('p').category(), Category::Memory);
        assert_eq!(decode(' ').category(), Category::Blank);
    }
}
