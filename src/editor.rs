//! Editor abstraction and an in-memory note buffer.
//!
//! The importer talks to the host editor only through [`Editor`]. The CLI
//! uses [`NoteBuffer`], which holds a note's text and a cursor.

use std::fmt;

/// A position in a document: zero-based line and character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CursorPosition {
    pub line: usize,
    pub ch: usize,
}

impl CursorPosition {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.ch)
    }
}

/// The two editor operations the importer needs.
pub trait Editor {
    /// Current cursor position.
    fn cursor(&self) -> CursorPosition;

    /// Insert `text` at `at`.
    fn replace_range(&mut self, text: &str, at: CursorPosition);
}

/// A markdown note held in memory with a cursor.
///
/// Text inserted exactly at the cursor lands after it and leaves the cursor
/// where it was, so repeated inserts at the cursor stack up in reverse order.
/// Inserts before the cursor push it forward.
#[derive(Debug, Clone, Default)]
pub struct NoteBuffer {
    text: String,
    cursor: CursorPosition,
}

impl NoteBuffer {
    /// Create a buffer with the cursor at the start.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: CursorPosition::default(),
        }
    }

    /// Create a buffer with the cursor at the end of the text.
    pub fn with_cursor_at_end(text: impl Into<String>) -> Self {
        let mut buffer = Self::new(text);
        buffer.cursor = buffer.end_position();
        buffer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Move the cursor, clamping it into the document.
    pub fn set_cursor(&mut self, pos: CursorPosition) {
        self.cursor = self.clamp(pos);
    }

    /// Position just past the last character.
    pub fn end_position(&self) -> CursorPosition {
        self.position_of(self.text.len())
    }

    /// Clamp a position to an existing line and column.
    ///
    /// The `\r` of a CRLF line ending is not part of the line, so a clamped
    /// column never lands between `\r` and `\n`.
    pub fn clamp(&self, pos: CursorPosition) -> CursorPosition {
        let last_line = self.text.matches('\n').count();
        let line = pos.line.min(last_line);
        let line_len = self
            .text
            .split('\n')
            .nth(line)
            .map(|l| {
                let content = if line < last_line {
                    l.strip_suffix('\r').unwrap_or(l)
                } else {
                    l
                };
                content.chars().count()
            })
            .unwrap_or(0);
        CursorPosition::new(line, pos.ch.min(line_len))
    }

    /// Byte offset of a (clamped) position.
    fn offset_of(&self, pos: CursorPosition) -> usize {
        let pos = self.clamp(pos);
        let mut offset = 0;
        for (i, line) in self.text.split('\n').enumerate() {
            if i == pos.line {
                return offset
                    + line
                        .char_indices()
                        .nth(pos.ch)
                        .map(|(idx, _)| idx)
                        .unwrap_or(line.len());
            }
            offset += line.len() + 1;
        }
        self.text.len()
    }

    /// Position of a byte offset on a char boundary.
    fn position_of(&self, offset: usize) -> CursorPosition {
        let before = &self.text[..offset.min(self.text.len())];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        CursorPosition::new(line, before[line_start..].chars().count())
    }
}

impl Editor for NoteBuffer {
    fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    fn replace_range(&mut self, text: &str, at: CursorPosition) {
        let insert_at = self.offset_of(at);
        let cursor_offset = self.offset_of(self.cursor);

        self.text.insert_str(insert_at, text);

        if insert_at < cursor_offset {
            self.cursor = self.position_of(cursor_offset + text.len());
        }
    }
}
