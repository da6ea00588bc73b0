//! # ESC/POS Text Styling Commands
//!
//! This module implements the text formatting commands the receipt markup
//! needs: emphasis, justification and character size.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Bold | ESC E n | **Emphasized** text |
//! | Justification | ESC a n | Left / center / right |
//! | Print mode | ESC ! n | Double height and/or width |
//!
//! ## Print Mode Bits (ESC ! n)
//!
//! ```text
//! bit 4 (0x10)  double height
//! bit 5 (0x20)  double width
//! 0x30          double height + double width ("double size")
//! 0x00          normal size
//! ```

use super::commands::ESC;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Select Justification (ESC a n)
///
/// Sets the alignment for subsequent text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC a n  |
/// | Hex     | 1B 61 n  |
/// | Decimal | 27 97 n  |
///
/// ## Behavior
///
/// - Takes effect at the start of the next line
/// - Reset by ESC @ (initialize)
///
/// ## Example
///
/// ```
/// use posbridge::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

/// Convenience function for left alignment
#[inline]
pub fn align_left() -> Vec<u8> {
    align(Alignment::Left)
}

/// Convenience function for center alignment
#[inline]
pub fn align_center() -> Vec<u8> {
    align(Alignment::Center)
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// # Emphasized Mode On (ESC E 1)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | Hex     | 1B 45 01 |
/// | Decimal | 27 69 1  |
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E', 1]
}

/// # Emphasized Mode Off (ESC E 0)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | Hex     | 1B 45 00 |
/// | Decimal | 27 69 0  |
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'E', 0]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Print mode bit selecting double-height characters.
pub const MODE_DOUBLE_HEIGHT: u8 = 0x10;

/// Print mode bit selecting double-width characters.
pub const MODE_DOUBLE_WIDTH: u8 = 0x20;

/// # Select Print Mode (ESC ! n)
///
/// Replaces the whole print mode byte. Only the size bits are used by
/// posbridge; emphasis is driven separately through ESC E so that it can be
/// switched off independently of the size.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC ! n  |
/// | Hex     | 1B 21 n  |
/// | Decimal | 27 33 n  |
pub fn print_mode(n: u8) -> Vec<u8> {
    vec![ESC, b'!', n]
}

/// Double-height characters (`1B 21 10`).
#[inline]
pub fn double_height_on() -> Vec<u8> {
    print_mode(MODE_DOUBLE_HEIGHT)
}

/// Double-height and double-width characters (`1B 21 30`).
///
/// ```
/// use posbridge::protocol::text;
///
/// assert_eq!(text::double_size_on(), vec![0x1B, 0x21, 0x30]);
/// ```
#[inline]
pub fn double_size_on() -> Vec<u8> {
    print_mode(MODE_DOUBLE_HEIGHT | MODE_DOUBLE_WIDTH)
}

/// Back to normal size (`1B 21 00`).
#[inline]
pub fn size_normal() -> Vec<u8> {
    print_mode(0)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
        assert_eq!(align(Alignment::Right), vec![0x1B, 0x61, 0x02]);
        assert_eq!(align_left(), align(Alignment::Left));
        assert_eq!(align_center(), align(Alignment::Center));
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold_on(), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold_off(), vec![0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(double_height_on(), vec![0x1B, 0x21, 0x10]);
        assert_eq!(double_size_on(), vec![0x1B, 0x21, 0x30]);
        assert_eq!(size_normal(), vec![0x1B, 0x21, 0x00]);
    }
}
