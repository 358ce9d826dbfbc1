//! The parser's output alphabet.

use crate::color::Color;

/// Mode for an `EL` (Erase in Line, `ESC[nK`) sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EraseLineMode {
    /// `ESC[K` or `ESC[0K` — from the cursor to the end of the line.
    ToEnd,
    /// `ESC[1K` — from the start of the line to the cursor (inclusive).
    ToBeginning,
    /// `ESC[2K` — the entire line.
    All,
}

/// One unit of parser output.
///
/// `parse` (see [`crate::parser`]) turns a chunk of input bytes into an
/// ordered `Vec<Action>`. `Print` text, concatenated with the other
/// variants in place, reproduces the parsed prefix of the input; any
/// unparsed tail is carried as a trailing [`Action::Remainder`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// One or more consecutive printable bytes.
    Print(String),
    /// `\n`.
    Linebreak,
    /// `\r`.
    CarriageReturn,

    /// `ESC[...m` — set foreground color (`None` clears it, SGR 39/0).
    SetForeground(Option<Color>),
    /// `ESC[...m` — set background color (`None` clears it, SGR 39/0).
    SetBackground(Option<Color>),
    /// SGR 1 / part of SGR 0.
    SetBold(bool),
    /// SGR 2 / part of SGR 0.
    SetFaint(bool),
    /// SGR 3 / part of SGR 0.
    SetItalic(bool),
    /// SGR 4 / part of SGR 0.
    SetUnderline(bool),
    /// SGR 7 / part of SGR 0.
    SetInverted(bool),

    /// `ESC[nA` — move the cursor up `n` rows (n >= 1).
    CursorUp(u32),
    /// `ESC[nB` — move the cursor down `n` rows (n >= 1).
    CursorDown(u32),
    /// `ESC[nC` — move the cursor forward `n` columns (n >= 1).
    CursorForward(u32),
    /// `ESC[nD` — move the cursor back `n` columns (n >= 1).
    CursorBack(u32),
    /// `ESC[row;colH` or `ESC[row;colf` — 1-based absolute cursor position.
    CursorPosition(u32, u32),
    /// `ESC[colG` — absolute column. Unlike `CursorPosition`, the parameter
    /// is applied to the cursor verbatim, with no 1-based-to-0-based
    /// adjustment; this asymmetry is intentional, kept to match observed
    /// terminal behavior rather than strict ECMA-48 column numbering.
    CursorColumn(u32),

    /// `ESC[s`.
    SaveCursorPosition,
    /// `ESC[u`.
    RestoreCursorPosition,

    /// `ESC[nK`.
    EraseLine(EraseLineMode),

    /// The unparsed tail of the input: either an `ESC` with nothing
    /// following it, or an incomplete CSI sequence. Emitted at most once,
    /// and only as the final element of the returned `Vec<Action>`.
    Remainder(String),
}
