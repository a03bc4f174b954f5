//! Input, output and diagnostic streams
//!
//! The engine talks to the outside world only through an [`IoPort`]:
//! - [`StreamIo`] adapts any buffered reader and pair of writers; [`StdIo`] is the
//!   process-stream instance used by the command-line driver
//! - [`BufferedIo`] keeps everything in memory, for tests and for recorded runs
//!   whose output is replayed by the viewer

use crate::memory::value::Value;
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

/// The interpreter's view of its I/O streams
pub trait IoPort {
    /// Read one line of input, including its terminator; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Read one character of input; `None` at end of input
    fn read_char(&mut self) -> io::Result<Option<char>>;

    /// Write program output
    fn write_output(&mut self, text: &str) -> io::Result<()>;

    /// Write to the diagnostic stream (debug trace and grid dumps)
    fn write_diagnostic(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Everything written to the output stream so far, for ports that keep it
    fn captured_output(&self) -> Option<&str> {
        None
    }

    /// Forget captured output past `len` bytes; a no-op for ports that do not capture
    fn truncate_output(&mut self, _len: usize) {}
}

/// Read a single UTF-8 encoded character
///
/// Malformed sequences decode to U+FFFD rather than failing. A byte that
/// cannot continue the current sequence is left unread.
pub fn read_utf8_char<R: BufRead>(reader: &mut R) -> io::Result<Option<char>> {
    let Some(lead) = next_byte_if(reader, |_| true)? else {
        return Ok(None);
    };

    let width = match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
    };

    let mut buf = [lead, 0, 0, 0];
    for slot in buf.iter_mut().take(width).skip(1) {
        match next_byte_if(reader, |b| b & 0xC0 == 0x80)? {
            Some(b) => *slot = b,
            None => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        }
    }

    Ok(Some(
        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER),
    ))
}

/// Consume the next byte only if it satisfies `accept`
fn next_byte_if<R: BufRead>(
    reader: &mut R,
    accept: impl Fn(u8) -> bool,
) -> io::Result<Option<u8>> {
    let next = reader.fill_buf()?.first().copied();
    match next {
        Some(b) if accept(b) => {
            reader.consume(1);
            Ok(Some(b))
        }
        _ => Ok(None),
    }
}

/// Parse a line of numeric input leniently
///
/// Leading whitespace is skipped, an optional sign is accepted, and the
/// longest run of digits that follows is the value. Input without digits is
/// 0; values beyond the integer range saturate.
pub fn parse_lenient_integer(line: &str) -> Value {
    let trimmed = line.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: Value = 0;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        let d = Value::from(digit - b'0');
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) });
        match next {
            Some(v) => value = v,
            None => return if negative { Value::MIN } else { Value::MAX },
        }
    }
    value
}

/// An [`IoPort`] over arbitrary streams
pub struct StreamIo<R, W, D> {
    input: R,
    output: W,
    diagnostics: D,
}

impl<R: BufRead, W: Write, D: Write> StreamIo<R, W, D> {
    pub fn new(input: R, output: W, diagnostics: D) -> Self {
        StreamIo {
            input,
            output,
            diagnostics,
        }
    }
}

impl<R: BufRead, W: Write, D: Write> IoPort for StreamIo<R, W, D> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        // Prompts written with `,` or `.` must be visible before blocking
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        self.output.flush()?;
        read_utf8_char(&mut self.input)
    }

    fn write_output(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    fn write_diagnostic(&mut self, text: &str) -> io::Result<()> {
        self.diagnostics.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()?;
        self.diagnostics.flush()
    }
}

/// Standard input, output and error of the process
pub type StdIo = StreamIo<StdinLock<'static>, Stdout, Stderr>;

impl StdIo {
    pub fn stdio() -> Self {
        StreamIo::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

/// In-memory streams with captured output
#[derive(Debug, Clone, Default)]
pub struct BufferedIo {
    input: io::Cursor<Vec<u8>>,
    output: String,
    diagnostics: String,
}

impl BufferedIo {
    pub fn new(input: impl Into<Vec<u8>>) -> Self {
        BufferedIo {
            input: io::Cursor::new(input.into()),
            output: String::new(),
            diagnostics: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn diagnostics(&self) -> &str {
        &self.diagnostics
    }
}

impl IoPort for BufferedIo {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        read_utf8_char(&mut self.input)
    }

    fn write_output(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn write_diagnostic(&mut self, text: &str) -> io::Result<()> {
        self.diagnostics.push_str(text);
        Ok(())
    }

    fn captured_output(&self) -> Option<&str> {
        Some(&self.output)
    }

    fn truncate_output(&mut self, len: usize) {
        if self.output.is_char_boundary(len) {
            self.output.truncate(len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_lenient_integer("42\n"), 42);
        assert_eq!(parse_lenient_integer("  -17"), -17);
        assert_eq!(parse_lenient_integer("+8"), 8);
    }

    #[test]
    fn test_parse_digit_prefix() {
        assert_eq!(parse_lenient_integer("12abc"), 12);
        assert_eq!(parse_lenient_integer("3 4"), 3);
    }

    #[test]
    fn test_parse_malformed_is_zero() {
        assert_eq!(parse_lenient_integer("abc"), 0);
        assert_eq!(parse_lenient_integer(""), 0);
        assert_eq!(parse_lenient_integer("-"), 0);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_lenient_integer("99999999999999999999"), Value::MAX);
        assert_eq!(parse_lenient_integer("-99999999999999999999"), Value::MIN);
    }

    #[test]
    fn test_read_utf8_chars() {
        let mut input = io::Cursor::new("aé☺".as_bytes().to_vec());
        assert_eq!(read_utf8_char(&mut input).unwrap(), Some('a'));
        assert_eq!(read_utf8_char(&mut input).unwrap(), Some('é'));
        assert_eq!(read_utf8_char(&mut input).unwrap(), Some('☺'));
        assert_eq!(read_utf8_char(&mut input).unwrap(), None);
    }

    #[test]
    fn test_read_truncated_sequence() {
        let mut input = io::Cursor::new(vec![0xE2, 0x98]);
        assert_eq!(
            read_utf8_char(&mut input).unwrap(),
            Some(char::REPLACEMENT_CHARACTER)
        );
    }

    #[test]
    fn test_read_interrupted_sequence_keeps_next_byte() {
        let mut input = io::Cursor::new(vec![0xC3, b'A', b'B']);
        assert_eq!(
            read_utf8_char(&mut input).unwrap(),
            Some(char::REPLACEMENT_CHARACTER)
        );
        assert_eq!(read_utf8_char(&mut input).unwrap(), Some('A'));
        assert_eq!(read_utf8_char(&mut input).unwrap(), Some('B'));
        assert_eq!(read_utf8_char(&mut input).unwrap(), None);
    }

    #[test]
    fn test_buffered_io_truncates_output() {
        let mut io = BufferedIo::default();
        io.write_output("12").unwrap();
        io.write_output("é").unwrap();
        io.truncate_output(1);
        assert_eq!(io.output(), "1");
        assert_eq!(io.captured_output(), Some("1"));
    }

    #[test]
    fn test_buffered_io_mixes_lines_and_chars() {
        let mut io = BufferedIo::new("12\nxy");
        assert_eq!(io.read_line().unwrap().as_deref(), Some("12\n"));
        assert_eq!(io.read_char().unwrap(), Some('x'));
        assert_eq!(io.read_line().unwrap().as_deref(), Some("y"));
        assert_eq!(io.read_line().unwrap(), None);
    }

    #[test]
    fn test_stream_io_writes_through() {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        {
            let mut io = StreamIo::new(io::Cursor::new(Vec::new()), &mut out, &mut diag);
            io.write_output("hi").unwrap();
            io.write_diagnostic("dbg").unwrap();
            io.flush().unwrap();
        }
        assert_eq!(out, b"hi");
        assert_eq!(diag, b"dbg");
    }
}
