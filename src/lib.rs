//! Incremental ANSI escape sequence parser and styled terminal screen
//! buffer, for embedding in tools that display or post-process captured
//! terminal output (CI log viewers, build dashboards, and the like).
//!
//! The crate is split into the two tightly coupled subsystems that do the
//! actual work, plus the small amount of supporting machinery around them:
//!
//! - [`parser`] — a resumable byte-to-[`Action`](action::Action) translator
//!   that tolerates arbitrary chunk boundaries, including cuts mid-escape.
//! - [`model`] — the [`Model`](model::Model): a 2-D grid of styled runs
//!   ([`buffer::Chunk`]) per row, plus the cursor state machine
//!   ([`model::Model::update`]) that consumes parser actions and mutates
//!   the buffer in place.
//! - [`color`] and [`action`] — the closed enumerations both of the above
//!   are built from.
//! - [`style`] — folds SGR actions into the [`style::Style`] in effect for
//!   the next printed [`buffer::Chunk`].
//! - [`render`] — a reference HTML projection of a [`Model`](model::Model),
//!   following the rendering contract documented on [`render::render_html`].
//!
//! `Model::update` is a total, panic-free function of its inputs: there is
//! no `Result` to check and no way for a byte stream, however malformed,
//! to produce anything other than a well-defined `Model`. Malformed or
//! dropped input is observable only through the `log` facade (`trace` for
//! every applied action, `debug` for anything discarded), so embedders who
//! want that visibility can wire a subscriber without the core depending
//! on one.
//!
//! ```
//! use ansi_screen_buffer::{LineDiscipline, Model};
//!
//! let model = Model::init(LineDiscipline::Cooked).update(b"\x1b[31mred\x1b[0m text\n");
//! assert_eq!(model.buffer().row_count(), 2);
//! ```

pub mod action;
pub mod buffer;
pub mod color;
pub mod model;
pub mod parser;
pub mod render;
pub mod style;

pub use action::{Action, EraseLineMode};
pub use buffer::{Buffer, Chunk, Line};
pub use color::Color;
pub use model::{CursorPosition, LineDiscipline, Model};
pub use render::render_html;
pub use style::Style;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_monotonicity_end_to_end() {
        let a: &[u8] = b"hello \x1b[31mworld";
        let b: &[u8] = b"\x1b[0m!\n";

        let combined = Model::init(LineDiscipline::Cooked).update(&[a, b].concat());
        let split = Model::init(LineDiscipline::Cooked).update(a).update(b);

        assert_eq!(combined.buffer(), split.buffer());
        assert_eq!(combined.cursor(), split.cursor());
        assert_eq!(combined.style(), split.style());
    }

    #[test]
    fn every_reachable_line_satisfies_the_length_invariant() {
        let model = Model::init(LineDiscipline::Cooked).update(b"ab\x1b[31mcd\refg\nh\x1b[1K");
        for line in model.buffer().rows() {
            let summed: usize = line.chunks().iter().map(|c| c.text.chars().count()).sum();
            assert_eq!(line.len(), summed);
            assert!(line.chunks().iter().all(|c| !c.text.is_empty()));
        }
    }

    #[test]
    fn sgr_0_is_an_idempotent_reset_after_any_prefix() {
        let model = Model::init(LineDiscipline::Cooked).update(b"\x1b[1;31;4mstyled\x1b[0m");
        assert_eq!(model.style(), Style::new());
    }
}
