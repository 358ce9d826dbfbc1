//! The incremental, resumable ANSI escape sequence parser.
//!
//! [`parse`] is a pure function, `&[u8] -> Vec<Action>`. It holds no state
//! of its own; resumption across chunk boundaries works entirely through
//! the caller prepending a previous call's trailing [`Action::Remainder`]
//! to the next chunk (see [`crate::model::Model::update`]).

use crate::action::{Action, EraseLineMode};
use crate::color::Color;
use memchr::memchr3;

const ESC: u8 = 0x1B;

/// Parse one chunk of bytes into an ordered list of [`Action`]s.
///
/// The caller is responsible for concatenating any [`Action::Remainder`]
/// from a previous call onto the front of `input` before calling this
/// again — the parser itself never buffers anything between calls.
pub fn parse(input: &[u8]) -> Vec<Action> {
    let mut actions = Vec::new();
    let mut cursor = Cursor { bytes: input, pos: 0 };
    let mut print_run: Vec<u8> = Vec::new();

    while let Some(byte) = cursor.peek() {
        match byte {
            b'\r' => {
                flush_print(&mut print_run, &mut actions);
                cursor.advance(1);
                actions.push(Action::CarriageReturn);
            }
            b'\n' => {
                flush_print(&mut print_run, &mut actions);
                cursor.advance(1);
                actions.push(Action::Linebreak);
            }
            ESC => {
                match cursor.peek_at(1) {
                    None => {
                        // ESC is the last byte of the chunk: stash it whole.
                        flush_print(&mut print_run, &mut actions);
                        actions.push(Action::Remainder(bytes_to_text(&cursor.bytes[cursor.pos..])));
                        return actions;
                    }
                    Some(b'[') => {
                        flush_print(&mut print_run, &mut actions);
                        match parse_csi(&mut cursor) {
                            CsiResult::Actions(mut csi_actions) => actions.append(&mut csi_actions),
                            CsiResult::Dropped => {
                                log::debug!("dropped invalid or unknown CSI sequence");
                            }
                            CsiResult::Incomplete(start) => {
                                actions.push(Action::Remainder(bytes_to_text(&cursor.bytes[start..])));
                                return actions;
                            }
                        }
                    }
                    Some(_) => {
                        // Non-CSI escape: this core recognizes no other ESC
                        // sequences, so the lone ESC byte is folded into the
                        // surrounding print run like any other unrecognized
                        // byte, and the byte after it is parsed normally.
                        print_run.push(ESC);
                        cursor.advance(1);
                    }
                }
            }
            _ => {
                // Bulk-copy the run of plain bytes up to the next byte this
                // parser gives special meaning to, rather than pushing one
                // byte at a time.
                let rest = &cursor.bytes[cursor.pos..];
                let run_len = memchr3(b'\r', b'\n', ESC, rest).unwrap_or(rest.len());
                print_run.extend_from_slice(&rest[..run_len]);
                cursor.advance(run_len);
            }
        }
    }

    flush_print(&mut print_run, &mut actions);
    actions
}

fn flush_print(print_run: &mut Vec<u8>, actions: &mut Vec<Action>) {
    if !print_run.is_empty() {
        actions.push(Action::Print(bytes_to_text(print_run)));
        print_run.clear();
    }
}

/// Every input byte is one code unit and one column (see the crate's
/// Non-goals: no wide/combining-character width calculation). Bytes are
/// mapped 1:1 onto their Latin-1 codepoint so that arbitrary byte streams
/// — including those that are not valid UTF-8 — always produce a valid
/// Rust `String` without losing or merging columns.
fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }
}

enum CsiResult {
    Actions(Vec<Action>),
    Dropped,
    /// Carries the byte offset where the unterminated sequence starts
    /// (the leading `ESC`), so the caller can slice the remainder.
    Incomplete(usize),
}

/// Parse a single CSI sequence starting at `cursor.pos == ESC`, with
/// `cursor.peek_at(1) == Some(b'[')` already established by the caller.
fn parse_csi(cursor: &mut Cursor<'_>) -> CsiResult {
    let start = cursor.pos;
    cursor.advance(2); // consume ESC '['

    let mut params: Vec<Option<u32>> = vec![None];
    // Once a byte inside the parameter list is neither a digit nor `;`,
    // the sequence is malformed; we keep scanning for the terminator so
    // the whole sequence, from `ESC[` through the terminator, is discarded
    // as one unit rather than leaking its tail as printed text.
    let mut malformed = false;
    loop {
        match cursor.peek() {
            None => return CsiResult::Incomplete(start),
            Some(b'0'..=b'9') if !malformed => {
                let digit = (cursor.peek().unwrap() - b'0') as u32;
                let last = params.last_mut().unwrap();
                *last = Some(last.unwrap_or(0).saturating_mul(10).saturating_add(digit));
                cursor.advance(1);
            }
            Some(b';') if !malformed => {
                params.push(None);
                cursor.advance(1);
            }
            Some(b @ 0x40..=0x7E) => {
                cursor.advance(1);
                if malformed {
                    return CsiResult::Dropped;
                }
                return dispatch_csi(b, &params);
            }
            Some(_) => {
                malformed = true;
                cursor.advance(1);
            }
        }
    }
}

fn dispatch_csi(final_byte: u8, params: &[Option<u32>]) -> CsiResult {
    let n = |i: usize, default: u32| params.get(i).copied().flatten().unwrap_or(default);

    match final_byte {
        b'm' => expand_sgr(params),
        b'A' => CsiResult::Actions(vec![Action::CursorUp(n(0, 1).max(1))]),
        b'B' => CsiResult::Actions(vec![Action::CursorDown(n(0, 1).max(1))]),
        b'C' => CsiResult::Actions(vec![Action::CursorForward(n(0, 1).max(1))]),
        b'D' => CsiResult::Actions(vec![Action::CursorBack(n(0, 1).max(1))]),
        b'H' | b'f' => CsiResult::Actions(vec![Action::CursorPosition(n(0, 1), n(1, 1))]),
        b'G' => CsiResult::Actions(vec![Action::CursorColumn(n(0, 1))]),
        b's' => CsiResult::Actions(vec![Action::SaveCursorPosition]),
        b'u' => CsiResult::Actions(vec![Action::RestoreCursorPosition]),
        b'K' => {
            let mode = match n(0, 0) {
                1 => EraseLineMode::ToBeginning,
                2 => EraseLineMode::All,
                _ => EraseLineMode::ToEnd,
            };
            CsiResult::Actions(vec![Action::EraseLine(mode)])
        }
        _ => {
            log::debug!("unknown CSI final byte {:#04x}", final_byte);
            CsiResult::Dropped
        }
    }
}

/// Expand `ESC[...m` into the seven style-setting [`Action`]s it denotes.
///
/// An empty parameter list (`ESC[m`) has no assigned meaning here and is
/// dropped rather than treated as an implicit reset.
fn expand_sgr(params: &[Option<u32>]) -> CsiResult {
    if params.len() == 1 && params[0].is_none() {
        return CsiResult::Dropped;
    }

    let mut actions = Vec::with_capacity(params.len());
    for &param in params {
        let code = param.unwrap_or(0);
        match code {
            0 => {
                actions.push(Action::SetForeground(None));
                actions.push(Action::SetBackground(None));
                actions.push(Action::SetBold(false));
                actions.push(Action::SetFaint(false));
                actions.push(Action::SetItalic(false));
                actions.push(Action::SetUnderline(false));
                actions.push(Action::SetInverted(false));
            }
            1 => actions.push(Action::SetBold(true)),
            2 => actions.push(Action::SetFaint(true)),
            3 => actions.push(Action::SetItalic(true)),
            4 => actions.push(Action::SetUnderline(true)),
            7 => actions.push(Action::SetInverted(true)),
            30..=37 => actions.push(Action::SetForeground(Some(Color::from_standard_index(code - 30)))),
            40..=47 => actions.push(Action::SetBackground(Some(Color::from_standard_index(code - 40)))),
            90..=97 => actions.push(Action::SetForeground(Some(Color::from_bright_index(code - 90)))),
            100..=107 => actions.push(Action::SetBackground(Some(Color::from_bright_index(code - 100)))),
            other => log::debug!("ignored unknown SGR parameter {other}"),
        }
    }
    CsiResult::Actions(actions)
}
