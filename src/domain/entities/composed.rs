//! The composed wire format: a bold display-name header line followed by the
//! rendered body.
//!
//! ```text
//! **Name**
//! body...
//! ```
//!
//! Messages the bridge posts to Telegram come back later as reply targets, so
//! the same type that renders the header also parses it.

use serde::Serialize;

const HEADER_DELIMITER: &str = "**";

/// Structured form of a composed message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    pub display_name: String,
    pub body: String,
}

impl ComposedMessage {
    pub fn new(display_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            body: body.into(),
        }
    }

    /// Render as `**name**\nbody`
    pub fn render(&self) -> String {
        format!(
            "{delim}{}{delim}\n{}",
            self.display_name,
            self.body,
            delim = HEADER_DELIMITER
        )
    }

    /// Split previously composed text back into header name and body.
    ///
    /// The body is everything after the first newline (empty when there is
    /// none). Header lines without the bold delimiters are taken verbatim.
    pub fn parse(text: &str) -> Self {
        let (header, body) = text.split_once('\n').unwrap_or((text, ""));
        let display_name = header
            .strip_prefix(HEADER_DELIMITER)
            .and_then(|name| name.strip_suffix(HEADER_DELIMITER))
            .unwrap_or(header);

        Self::new(display_name, body)
    }
}

/// Result of converting one inbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    from: String,
    body: String,
    composed: String,
}

impl ConversionResult {
    pub fn from_name(&self) -> &str {
        &self.from
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn composed(&self) -> &str {
        &self.composed
    }

    /// Structured `{display_name, body}` pair for storage layers
    pub fn parts(&self) -> ComposedMessage {
        ComposedMessage::new(self.from.clone(), self.body.clone())
    }
}

impl From<ComposedMessage> for ConversionResult {
    fn from(message: ComposedMessage) -> Self {
        let composed = message.render();
        Self {
            from: message.display_name,
            body: message.body,
            composed,
        }
    }
}
