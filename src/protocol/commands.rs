//! # ESC/POS Job Commands
//!
//! This module implements the job-level ESC/POS commands: printer
//! initialization, line feeds and the paper cutter.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC a n`, `GS V m n`
//!
//! Styling commands (bold, alignment, character size) live in
//! [`super::text`].

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for cutter control.
///
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount.
pub const LF: u8 = 0x0A;

/// Number of blank lines fed before cutting so the last printed line clears
/// the cutter blade.
pub const TRAILING_FEED_LINES: usize = 4;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Sent at the start of
/// every job so styling left over from a previous job cannot leak in.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Emphasis disabled
/// - Print mode reset to normal size
/// - Justification reset to left
///
/// ## Example
///
/// ```
/// use posbridge::protocol::commands;
///
/// let init = commands::init();
/// assert_eq!(init, vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Line Feed (LF)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | LF    |
/// | Hex     | 0A    |
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// Feed `n` blank lines by repeating LF.
///
/// ```
/// use posbridge::protocol::commands;
///
/// assert_eq!(commands::feed_lines(4), vec![0x0A; 4]);
/// ```
#[inline]
pub fn feed_lines(n: usize) -> Vec<u8> {
    vec![LF; n]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Feed and Partial Cut (GS V B n)
///
/// Feeds paper by `n` motion units to the cutting position, then performs a
/// partial cut. With `n = 0` the printer feeds only as far as the cutter needs.
///
/// ## Protocol Details
///
/// | Format  | Bytes       |
/// |---------|-------------|
/// | ASCII   | GS V B NUL  |
/// | Hex     | 1D 56 42 00 |
/// | Decimal | 29 86 66 0  |
///
/// ## Behavior
///
/// Partial cuts leave a small "hinge" connecting the receipt to the roll,
/// making it easy to tear off while preventing the receipt from falling.
///
/// ## Example
///
/// ```
/// use posbridge::protocol::commands;
///
/// assert_eq!(commands::cut_partial(), vec![0x1D, 0x56, 0x42, 0x00]);
/// ```
#[inline]
pub fn cut_partial() -> Vec<u8> {
    vec![GS, b'V', b'B', 0]
}

// ============================================================================
// TESTS
// ============================================================================
