//! The sixteen SGR colors recognized by [`crate::parser`].

/// One of the eight standard colors or their eight bright variants.
///
/// There is no 256-color or truecolor variant here (see the crate's
/// Non-goals) — a terminal that emits `38;5;n` or `38;2;r;g;b` simply has
/// those SGR parameters ignored by [`crate::parser::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    pub(crate) fn from_standard_index(index: u16) -> Self {
        match index {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            _ => Color::White,
        }
    }

    pub(crate) fn from_bright_index(index: u16) -> Self {
        match index {
            0 => Color::BrightBlack,
            1 => Color::BrightRed,
            2 => Color::BrightGreen,
            3 => Color::BrightYellow,
            4 => Color::BrightBlue,
            5 => Color::BrightMagenta,
            6 => Color::BrightCyan,
            _ => Color::BrightWhite,
        }
    }

    /// Whether this color is one of the eight bright variants.
    pub fn is_bright(self) -> bool {
        matches!(
            self,
            Color::BrightBlack
                | Color::BrightRed
                | Color::BrightGreen
                | Color::BrightYellow
                | Color::BrightBlue
                | Color::BrightMagenta
                | Color::BrightCyan
                | Color::BrightWhite
        )
    }

    /// The lowercase ECMA-48 color name, without a `bright-` prefix, used by
    /// the renderer to build its CSS class names.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black | Color::BrightBlack => "black",
            Color::Red | Color::BrightRed => "red",
            Color::Green | Color::BrightGreen => "green",
            Color::Yellow | Color::BrightYellow => "yellow",
            Color::Blue | Color::BrightBlue => "blue",
            Color::Magenta | Color::BrightMagenta => "magenta",
            Color::Cyan | Color::BrightCyan => "cyan",
            Color::White | Color::BrightWhite => "white",
        }
    }
}
