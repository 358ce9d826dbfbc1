//! The per-row sequence of styled runs ("chunks") that makes up one
//! [`crate::model::Model`]'s screen.

use crate::style::Style;

/// A non-empty contiguous run of printable code units sharing one [`Style`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    pub text: String,
    pub style: Style,
}

impl Chunk {
    /// Construct a chunk. `text` must not be empty: zero-length chunks are
    /// never written into a [`Line`]; callers within this crate uphold that
    /// by construction.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "chunks must never be empty");
        Self { text, style }
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One row of the [`Buffer`]: an ordered sequence of [`Chunk`]s.
///
/// Chunks are never merged or split for compactness. The model is
/// append-biased; splits happen only when a mid-row overwrite requires it.
/// Two adjacent writes of the same style remain two adjacent chunks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    chunks: Vec<Chunk>,
}

impl Line {
    /// An empty line with no chunks.
    pub fn new() -> Self {
        Self::default()
    }

    /// This line's chunks, in left-to-right order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// The column index one past the last printed cell: the sum of this
    /// line's chunks' text lengths.
    pub fn len(&self) -> usize {
        self.chunks.iter().map(Chunk::len).sum()
    }

    /// Whether this line has no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Overwrite the half-open range `[column, column + chunk.len())` with
    /// `chunk`, returning a new line. Writing past the current end pads the
    /// gap with spaces in `chunk`'s style; writing inside the line splits
    /// the existing chunks around the overwritten range.
    pub fn write(&self, column: usize, chunk: Chunk) -> Self {
        let len = self.len();
        let mut out = Vec::with_capacity(self.chunks.len() + 2);

        if column >= len {
            out.extend(self.chunks.iter().cloned());
            if column > len {
                out.push(Chunk::new(" ".repeat(column - len), chunk.style));
            }
            out.push(chunk);
        } else {
            let prefix = self.take_prefix(column);
            let suffix = self.drop_prefix(column + chunk.len());
            out.extend(prefix.chunks);
            out.push(chunk);
            out.extend(suffix.chunks);
        }

        Self { chunks: out }
    }

    /// The prefix of this line covering the first `n` columns. The chunk
    /// spanning column `n`, if any, is truncated by code-unit count.
    pub fn take_prefix(&self, n: usize) -> Self {
        let mut out = Vec::new();
        let mut consumed = 0;
        for chunk in &self.chunks {
            if consumed >= n {
                break;
            }
            let remaining = n - consumed;
            if chunk.len() <= remaining {
                out.push(chunk.clone());
                consumed += chunk.len();
            } else {
                let truncated: String = chunk.text.chars().take(remaining).collect();
                out.push(Chunk::new(truncated, chunk.style));
                consumed = n;
            }
        }
        Self { chunks: out }
    }

    /// The suffix of this line starting at column `n`, symmetric to
    /// [`Line::take_prefix`].
    pub fn drop_prefix(&self, n: usize) -> Self {
        let mut out = Vec::new();
        let mut consumed = 0;
        for chunk in &self.chunks {
            if consumed >= n {
                out.push(chunk.clone());
                continue;
            }
            let chunk_len = chunk.len();
            if consumed + chunk_len <= n {
                consumed += chunk_len;
                continue;
            }
            let skip = n - consumed;
            let remainder: String = chunk.text.chars().skip(skip).collect();
            if !remainder.is_empty() {
                out.push(Chunk::new(remainder, chunk.style));
            }
            consumed = n;
        }
        Self { chunks: out }
    }

    /// Erase-in-line "to end": truncate the line at `column`, dropping
    /// everything from there on.
    pub fn erase_to_end(&self, column: usize) -> Self {
        self.take_prefix(column)
    }

    /// Erase-in-line "to beginning": blank the first `column` cells with a
    /// run of spaces in `style`, leaving the rest of the line untouched.
    pub fn erase_to_beginning(&self, column: usize, style: Style) -> Self {
        if column == 0 {
            return self.clone();
        }
        self.write(0, Chunk::new(" ".repeat(column), style))
    }

    /// Erase-in-line "all": the empty line.
    pub fn erase_all() -> Self {
        Self::default()
    }
}

/// An ordered sequence of [`Line`]s, indexed from row 0. Grows on demand
/// as rows are written; never shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buffer {
    lines: Vec<Line>,
}

impl Buffer {
    /// An empty buffer with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows, in order from row 0.
    pub fn rows(&self) -> &[Line] {
        &self.lines
    }

    /// The number of rows currently in the buffer.
    pub fn row_count(&self) -> usize {
        self.lines.len()
    }

    /// The line at `row`, or `None` if the buffer doesn't extend that far.
    pub fn row(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Replace row `row` with `f(current contents of row)`, growing the
    /// buffer with blank rows as needed so that `row` exists.
    pub fn update_line(&mut self, row: usize, f: impl FnOnce(&Line) -> Line) {
        if row >= self.lines.len() {
            self.lines.resize_with(row, Line::new);
            self.lines.push(f(&Line::new()));
        } else {
            let updated = f(&self.lines[row]);
            self.lines[row] = updated;
        }
    }
}
