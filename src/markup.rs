//! # Receipt Markup
//!
//! Turns one line of marked-up receipt text into ESC/POS bytes.
//!
//! ## Tokens
//!
//! | Token | Effect on the line |
//! |-------|--------------------|
//! | `**CENTER**` | centered |
//! | `**LARGE**` | double height, bold |
//! | `**XLARGE**` | double height and width, bold |
//!
//! A token applies to the whole line it appears in, wherever it appears and
//! however often. Tokens are removed from the printed text. `**XLARGE**`
//! wins over `**LARGE**` when both are present.
//!
//! ## Emitted Sequence
//!
//! ```text
//! [CENTER_ON] [DOUBLE_SIZE_ON | DOUBLE_HEIGHT_ON] [BOLD_ON]
//! text LF
//! [BOLD_OFF NORMAL_SIZE] [CENTER_OFF]
//! ```
//!
//! A line without tokens is emitted as its UTF-8 bytes plus LF, with no
//! control bytes at all.

use crate::protocol::{commands, text};
use crate::receipt::CommandStream;

/// Centers the line.
pub const CENTER_TOKEN: &str = "**CENTER**";

/// Double-height bold line.
pub const LARGE_TOKEN: &str = "**LARGE**";

/// Double-size bold line.
pub const XLARGE_TOKEN: &str = "**XLARGE**";

/// Tokens in the order they are stripped.
const TOKENS: [&str; 3] = [CENTER_TOKEN, LARGE_TOKEN, XLARGE_TOKEN];

/// Character size requested by a line's markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSize {
    #[default]
    Normal,
    /// `**LARGE**`: double height
    Large,
    /// `**XLARGE**`: double height and width
    ExtraLarge,
}

/// Style flags detected on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineStyle {
    pub center: bool,
    pub large: bool,
    pub xlarge: bool,
}

impl LineStyle {
    /// Detect which tokens occur anywhere in `line`.
    pub fn detect(line: &str) -> Self {
        Self {
            center: line.contains(CENTER_TOKEN),
            large: line.contains(LARGE_TOKEN),
            xlarge: line.contains(XLARGE_TOKEN),
        }
    }

    /// Effective character size. XLARGE takes precedence over LARGE.
    pub fn size(&self) -> LineSize {
        if self.xlarge {
            LineSize::ExtraLarge
        } else if self.large {
            LineSize::Large
        } else {
            LineSize::Normal
        }
    }

    /// Either size token turns on emphasis.
    pub fn bold(&self) -> bool {
        self.large || self.xlarge
    }

    /// True when no token was found.
    pub fn is_plain(&self) -> bool {
        !self.center && !self.large && !self.xlarge
    }
}

/// A receipt line split into its printable text and style flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub text: String,
    pub style: LineStyle,
}

impl ReceiptLine {
    /// Parse a raw line. Never fails: unknown or malformed markup is left
    /// in the text untouched.
    pub fn parse(raw: &str) -> Self {
        Self {
            text: strip_tokens(raw),
            style: LineStyle::detect(raw),
        }
    }

    /// Append this line's commands and text to `out`.
    pub fn emit(&self, out: &mut CommandStream) {
        let style = self.style;

        if style.center {
            out.append(text::align_center());
        }
        match style.size() {
            LineSize::ExtraLarge => out.append(text::double_size_on()),
            LineSize::Large => out.append(text::double_height_on()),
            LineSize::Normal => {}
        }
        if style.bold() {
            out.append(text::bold_on());
        }

        out.append(self.text.as_bytes());
        out.append(commands::line_feed());

        if style.bold() {
            out.append(text::bold_off());
            out.append(text::size_normal());
        }
        if style.center {
            out.append(text::align_left());
        }
    }
}

/// Encode one marked-up line into ESC/POS bytes.
///
/// ## Example
///
/// ```
/// use posbridge::markup::encode_line;
///
/// assert_eq!(encode_line("Hello"), b"Hello\n".to_vec());
/// assert_eq!(
///     encode_line("**CENTER**Hi"),
///     vec![0x1B, 0x61, 0x01, b'H', b'i', 0x0A, 0x1B, 0x61, 0x00],
/// );
/// ```
pub fn encode_line(line: &str) -> Vec<u8> {
    let mut out = CommandStream::new();
    ReceiptLine::parse(line).emit(&mut out);
    out.into_bytes()
}

/// Remove every markup token from `raw`.
///
/// Removal repeats until no token is left, so text like
/// `**CE**CENTER**NTER**` cannot collapse into a fresh token.
pub fn strip_tokens(raw: &str) -> String {
    let mut text = raw.to_string();
    while TOKENS.iter().any(|token| text.contains(token)) {
        for token in TOKENS {
            text = text.replace(token, "");
        }
    }
    text
}
