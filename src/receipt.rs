//! # Receipt Documents
//!
//! A [`ReceiptDocument`] is the parsed form of one print request: the raw
//! content split into [`ReceiptLine`]s. It is built once per request and
//! dropped once the job has been handed to a printer.
//!
//! [`CommandStream`] is the byte buffer every encoder writes into. It only
//! grows; nothing already appended can be changed.

use crate::markup::ReceiptLine;

/// Append-only ESC/POS byte buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandStream {
    bytes: Vec<u8>,
}

impl CommandStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes to the end of the stream.
    #[inline]
    pub fn append(&mut self, bytes: impl AsRef<[u8]>) {
        self.bytes.extend_from_slice(bytes.as_ref());
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for CommandStream {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// An ordered list of receipt lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptDocument {
    lines: Vec<ReceiptLine>,
}

impl ReceiptDocument {
    /// Split `content` on line feeds and parse each line.
    ///
    /// ## Splitting Rules
    ///
    /// - Trailing empty lines are dropped: `"a\n\n"` has one line.
    /// - Content without any `\n` is one line, even when empty.
    /// - Interior empty lines are kept and print as a bare line feed.
    /// - `\r` and every other character is kept as-is.
    ///
    /// ## Example
    ///
    /// ```
    /// use posbridge::receipt::ReceiptDocument;
    ///
    /// assert_eq!(ReceiptDocument::parse("a\n\nb\n\n").len(), 3);
    /// assert_eq!(ReceiptDocument::parse("").len(), 1);
    /// assert_eq!(ReceiptDocument::parse("\n").len(), 0);
    /// ```
    pub fn parse(content: &str) -> Self {
        let lines = split_lines(content)
            .into_iter()
            .map(ReceiptLine::parse)
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Encode every line, in order, without any job framing.
    pub fn encode_body(&self, out: &mut CommandStream) {
        for line in &self.lines {
            line.emit(out);
        }
    }
}

fn split_lines(content: &str) -> Vec<&str> {
    if !content.contains('\n') {
        return vec![content];
    }

    let mut parts: Vec<&str> = content.split('\n').collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(content: &str) -> Vec<String> {
        ReceiptDocument::parse(content)
            .lines()
            .iter()
            .map(|line| line.text.clone())
            .collect()
    }

    #[test]
    fn test_split_basic() {
        assert_eq!(texts("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_drops_trailing_empty_lines() {
        assert_eq!(texts("a\nb\n"), vec!["a", "b"]);
        assert_eq!(texts("a\n\n\n"), vec!["a"]);
        assert!(texts("\n\n").is_empty());
    }

    #[test]
    fn test_split_keeps_interior_and_leading_empty_lines() {
        assert_eq!(texts("\na\n\nb"), vec!["", "a", "", "b"]);
    }

    #[test]
    fn test_split_without_newline() {
        assert_eq!(texts(""), vec![""]);
        assert_eq!(texts("single"), vec!["single"]);
    }

    #[test]
    fn test_split_keeps_carriage_return() {
        assert_eq!(texts("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn test_encode_body_concatenates_lines() {
        let doc = ReceiptDocument::parse("a\n\nb");
        let mut out = CommandStream::new();
        doc.encode_body(&mut out);
        assert_eq!(out.as_bytes(), b"a\n\nb\n");
    }

    #[test]
    fn test_command_stream_append() {
        let mut stream = CommandStream::new();
        assert!(stream.is_empty());
        stream.append([0x1B, 0x40]);
        stream.append(b"hi");
        stream.append(vec![0x0A]);
        assert_eq!(stream.len(), 5);
        assert_eq!(stream.into_bytes(), vec![0x1B, 0x40, b'h', b'i', 0x0A]);
    }
}
