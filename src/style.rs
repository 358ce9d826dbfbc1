//! Folding SGR [`Action`]s into a [`Style`] record.

use crate::action::Action;
use crate::color::Color;

/// The text attributes in effect when a [`crate::buffer::Chunk`] is printed.
///
/// An immutable value type: every mutation in this module produces a new
/// `Style` rather than mutating fields piecemeal in place, mirroring the
/// reference implementation's "replace the whole record" semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub inverted: bool,
}

impl Style {
    /// The initial style: no color, no flags set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a single [`Action`] into this style, returning the updated
    /// value. Actions that are not one of the seven style-setting variants
    /// leave the style unchanged.
    pub fn apply(self, action: &Action) -> Self {
        match action {
            Action::SetForeground(color) => Self { foreground: *color, ..self },
            Action::SetBackground(color) => Self { background: *color, ..self },
            Action::SetBold(on) => Self { bold: *on, ..self },
            Action::SetFaint(on) => Self { faint: *on, ..self },
            Action::SetItalic(on) => Self { italic: *on, ..self },
            Action::SetUnderline(on) => Self { underline: *on, ..self },
            Action::SetInverted(on) => Self { inverted: *on, ..self },
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_action_is_handled_upstream_as_seven_actions() {
        // The parser expands SGR 0 into seven SetX(false)/SetForeground(None)
        // actions (see parser::expand_sgr_reset); style.rs only folds,
        // it never special-cases the raw SGR code.
        let s = Style::new()
            .apply(&Action::SetBold(true))
            .apply(&Action::SetForeground(Some(Color::Red)));
        assert!(s.bold);
        assert_eq!(s.foreground, Some(Color::Red));

        let reset = s
            .apply(&Action::SetForeground(None))
            .apply(&Action::SetBackground(None))
            .apply(&Action::SetBold(false))
            .apply(&Action::SetFaint(false))
            .apply(&Action::SetItalic(false))
            .apply(&Action::SetUnderline(false))
            .apply(&Action::SetInverted(false));
        assert_eq!(reset, Style::new());
    }

    #[test]
    fn non_style_actions_leave_style_unchanged() {
        let s = Style::new().apply(&Action::SetBold(true));
        let s2 = s.apply(&Action::Linebreak);
        assert_eq!(s, s2);
    }
}
