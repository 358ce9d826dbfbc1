//! The cursor engine, and the [`Model`] it mutates.
//!
//! This is where parser [`Action`]s meet the [`Buffer`] and [`Style`]
//! types: `Model::update` is the crate's single public entry point for
//! feeding bytes in.

use crate::action::{Action, EraseLineMode};
use crate::buffer::{Buffer, Chunk, Line};
use crate::parser;
use crate::style::Style;

/// Whether `\n` resets the column to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineDiscipline {
    /// `\n` advances the row only; the column is preserved, matching a
    /// raw tty where carriage return is the caller's own responsibility.
    Raw,
    /// `\n` advances the row and resets the column to zero, matching a
    /// cooked tty's newline translation.
    Cooked,
}

/// The cursor's (row, column), both zero-based and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorPosition {
    pub row: usize,
    pub column: usize,
}

impl CursorPosition {
    /// Construct a cursor position at the given row and column.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// The full state this crate threads through a captured byte stream:
/// the screen [`Buffer`], the [`CursorPosition`], the current [`Style`],
/// and the parser's stashed [`Action::Remainder`] from the previous call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model {
    line_discipline: LineDiscipline,
    buffer: Buffer,
    cursor: CursorPosition,
    saved_cursor: Option<CursorPosition>,
    style: Style,
    remainder: String,
}

impl Model {
    /// Construct an empty model with no rows and the cursor at (0, 0).
    pub fn init(line_discipline: LineDiscipline) -> Self {
        Self {
            line_discipline,
            buffer: Buffer::new(),
            cursor: CursorPosition::default(),
            saved_cursor: None,
            style: Style::new(),
            remainder: String::new(),
        }
    }

    /// The screen buffer accumulated so far.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// The cursor's current position.
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// The style that will be applied to the next printed text.
    pub fn style(&self) -> Style {
        self.style
    }

    /// The line discipline this model was constructed with.
    pub fn line_discipline(&self) -> LineDiscipline {
        self.line_discipline
    }

    /// Feed one chunk of bytes and return the evolved model.
    ///
    /// Any byte remainder stashed by a previous `update` call is prepended
    /// to `bytes` before parsing, so a CSI sequence (or a lone trailing
    /// `ESC`) cut across two calls is reassembled transparently.
    pub fn update(mut self, bytes: &[u8]) -> Self {
        let mut combined = std::mem::take(&mut self.remainder).into_bytes();
        combined.extend_from_slice(bytes);

        for action in parser::parse(&combined) {
            log::trace!("applying action {action:?}");
            self.apply(action);
        }

        self
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Print(text) => self.print(&text),
            Action::CarriageReturn => self.cursor.column = 0,
            Action::Linebreak => {
                self.cursor.row += 1;
                if self.line_discipline == LineDiscipline::Cooked {
                    self.cursor.column = 0;
                }
                // Force the row into existence even if nothing more is
                // printed before the next cursor manipulation, so a
                // trailing newline still adds a visible row.
                self.print("");
            }
            Action::CursorUp(n) => self.cursor.row = self.cursor.row.saturating_sub(n as usize),
            Action::CursorDown(n) => self.cursor.row = self.cursor.row.saturating_add(n as usize),
            Action::CursorForward(n) => self.cursor.column = self.cursor.column.saturating_add(n as usize),
            Action::CursorBack(n) => self.cursor.column = self.cursor.column.saturating_sub(n as usize),
            Action::CursorPosition(row, col) => {
                self.cursor = CursorPosition::new((row as usize).saturating_sub(1), (col as usize).saturating_sub(1));
            }
            // Unlike CursorPosition, no 1-based -> 0-based adjustment is
            // applied here: this asymmetry is intentional, kept to match
            // observed terminal behavior rather than strict ECMA-48 column
            // numbering.
            Action::CursorColumn(col) => self.cursor.column = col as usize,
            Action::SaveCursorPosition => self.saved_cursor = Some(self.cursor),
            Action::RestoreCursorPosition => {
                if let Some(saved) = self.saved_cursor {
                    self.cursor = saved;
                }
            }
            Action::EraseLine(mode) => self.erase_line(mode),
            Action::Remainder(text) => self.remainder = text,
            style_action @ (Action::SetForeground(_)
            | Action::SetBackground(_)
            | Action::SetBold(_)
            | Action::SetFaint(_)
            | Action::SetItalic(_)
            | Action::SetUnderline(_)
            | Action::SetInverted(_)) => {
                self.style = self.style.apply(&style_action);
            }
        }
    }

    fn print(&mut self, text: &str) {
        let row = self.cursor.row;
        let column = self.cursor.column;
        let style = self.style;

        if text.is_empty() {
            // An empty print still forces the row into existence.
            self.buffer.update_line(row, |line| line.clone());
        } else {
            let chunk = Chunk::new(text, style);
            let len = chunk.text.chars().count();
            self.buffer.update_line(row, |line| line.write(column, chunk.clone()));
            self.cursor.column += len;
        }
    }

    fn erase_line(&mut self, mode: EraseLineMode) {
        let row = self.cursor.row;
        let column = self.cursor.column;
        let style = self.style;
        match mode {
            EraseLineMode::ToEnd => self.buffer.update_line(row, |line| line.erase_to_end(column)),
            EraseLineMode::ToBeginning => self.buffer.update_line(row, |line| line.erase_to_beginning(column, style)),
            EraseLineMode::All => self.buffer.update_line(row, |_| Line::erase_all()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn line_text(model: &Model, row: usize) -> String {
        model
            .buffer()
            .row(row)
            .map(|line| line.chunks().iter().map(|c| c.text.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn plain_text_occupies_one_row() {
        let model = Model::init(LineDiscipline::Cooked).update(b"hello");
        assert_eq!(model.buffer().row_count(), 1);
        assert_eq!(line_text(&model, 0), "hello");
        assert_eq!(model.cursor(), CursorPosition::new(0, 5));
    }

    #[test]
    fn cooked_linebreak_resets_column() {
        let model = Model::init(LineDiscipline::Cooked).update(b"hi\nthere");
        assert_eq!(line_text(&model, 0), "hi");
        assert_eq!(line_text(&model, 1), "there");
        assert_eq!(model.cursor(), CursorPosition::new(1, 5));
    }

    #[test]
    fn raw_linebreak_preserves_column() {
        let model = Model::init(LineDiscipline::Raw).update(b"hi\nthere");
        assert_eq!(line_text(&model, 0), "hi");
        assert_eq!(line_text(&model, 1), "  there");
    }

    #[test]
    fn sgr_colors_produce_distinct_chunks() {
        let model = Model::init(LineDiscipline::Cooked).update(b"\x1b[31mred\x1b[0m black");
        let row = model.buffer().row(0).unwrap();
        assert_eq!(row.chunks().len(), 2);
        assert_eq!(row.chunks()[0].text, "red");
        assert_eq!(row.chunks()[0].style.foreground, Some(Color::Red));
        assert_eq!(row.chunks()[1].text, " black");
        assert_eq!(row.chunks()[1].style.foreground, None);
    }

    #[test]
    fn carriage_return_overwrites_from_the_start() {
        let model = Model::init(LineDiscipline::Cooked).update(b"abc\rXY");
        assert_eq!(line_text(&model, 0), "XYc");
    }

    #[test]
    fn a_csi_sequence_split_across_two_updates_still_applies() {
        let model = Model::init(LineDiscipline::Cooked).update(b"abc\x1b[2");
        assert_eq!(line_text(&model, 0), "abc");

        let model = model.update(b"Dxx");
        assert_eq!(line_text(&model, 0), "axx");
    }

    #[test]
    fn save_and_restore_cursor_position() {
        let model = Model::init(LineDiscipline::Cooked)
            .update(b"abc")
            .update(b"\x1b[s")
            .update(b"\ndef")
            .update(b"\x1b[u");
        assert_eq!(model.cursor(), CursorPosition::new(0, 3));
    }

    #[test]
    fn restore_without_a_prior_save_is_a_no_op() {
        let model = Model::init(LineDiscipline::Cooked).update(b"abc\x1b[u");
        assert_eq!(model.cursor(), CursorPosition::new(0, 3));
    }

    #[test]
    fn erase_to_end_truncates_the_row() {
        let model = Model::init(LineDiscipline::Cooked).update(b"hello\r\x1b[0K");
        assert_eq!(line_text(&model, 0), "");
    }

    #[test]
    fn erase_to_beginning_blanks_a_prefix() {
        let model = Model::init(LineDiscipline::Cooked).update(b"hello\x1b[2D\x1b[1K");
        assert_eq!(line_text(&model, 0), "   lo");
    }

    #[test]
    fn erase_all_blanks_the_whole_row() {
        let model = Model::init(LineDiscipline::Cooked).update(b"hello\x1b[2K");
        assert_eq!(line_text(&model, 0), "");
    }

    #[test]
    fn cursor_back_saturates_at_zero() {
        let model = Model::init(LineDiscipline::Cooked).update(b"\x1b[100Dx");
        assert_eq!(model.cursor(), CursorPosition::new(0, 1));
    }

    #[test]
    fn trailing_newline_still_grows_the_buffer() {
        let model = Model::init(LineDiscipline::Cooked).update(b"abc\n");
        assert_eq!(model.buffer().row_count(), 2);
        assert_eq!(line_text(&model, 1), "");
    }
}
