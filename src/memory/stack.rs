//! Operand stack
//!
//! [`OperandStack`] is the machine's only scratch storage. Popping or peeking
//! an empty stack is not an error: both yield 0, and every instruction that
//! consumes operands relies on that.

use super::value::Value;

/// Underflow-safe LIFO stack of values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandStack {
    values: Vec<Value>,
}

impl OperandStack {
    pub fn new() -> Self {
        OperandStack { values: Vec::new() }
    }

    /// Push a value as the new top
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Remove and return the top value, or 0 if the stack is empty
    pub fn pop(&mut self) -> Value {
        self.values.pop().unwrap_or(0)
    }

    /// Return the top value without removing it, or 0 if the stack is empty
    pub fn peek(&self) -> Value {
        self.values.last().copied().unwrap_or(0)
    }

    /// Pop and drop the top value
    pub fn discard(&mut self) {
        self.pop();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from bottom to top
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.values.iter()
    }
}

impl FromIterator<Value> for OperandStack {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        OperandStack {
            values: iter.into_iter().collect(),
        }
    }
}
