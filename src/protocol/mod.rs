//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! spoken by most thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Job commands (init, line feed, cut)
//! - [`text`]: Text styling (alignment, bold, character size)
//!
//! ## Usage Example
//!
//! ```
//! use posbridge::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//!
//! data.extend(commands::init());
//!
//! data.extend(text::align_center());
//! data.extend(text::bold_on());
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold_off());
//! data.extend(text::align_left());
//!
//! data.extend(commands::feed_lines(commands::TRAILING_FEED_LINES));
//! data.extend(commands::cut_partial());
//!
//! // Send `data` to a printer via a print subsystem...
//! ```

pub mod commands;
pub mod text;
