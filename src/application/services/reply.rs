//! Reply-chain annotation
//!
//! Labels a reply with the name of the replied-to sender and quotes a short
//! excerpt of the replied-to text above the body.

use super::DisplayNameResolver;
use crate::domain::entities::{Actor, BotIdentity, ComposedMessage, InboundMessage};
use crate::domain::traits::MemberLookup;

/// Maximum characters kept from the replied-to text
pub const QUOTE_MAX_CHARS: usize = 100;

/// Maximum lines kept from the replied-to text
pub const QUOTE_MAX_LINES: usize = 2;

/// Appended wherever an excerpt is cut
pub const ELLIPSIS: &str = "…";

const QUOTE_PREFIX: &str = "  > ";

/// Updated sender label and body after reply annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyAnnotation {
    pub from_name: String,
    pub text: String,
}

/// Annotates replies, resolving replies to the bridge's own posts back to
/// Discord members
pub struct ReplyAnnotator<'a, L: MemberLookup + ?Sized> {
    resolver: DisplayNameResolver,
    bot: BotIdentity,
    members: &'a L,
}

impl<'a, L: MemberLookup + ?Sized> ReplyAnnotator<'a, L> {
    pub fn new(resolver: DisplayNameResolver, bot: BotIdentity, members: &'a L) -> Self {
        Self {
            resolver,
            bot,
            members,
        }
    }

    /// Annotate `message`, which must carry a `reply_to`. Messages without
    /// one come back unchanged.
    pub fn annotate(&self, message: &InboundMessage, from_name: &str, base_text: &str) -> ReplyAnnotation {
        let Some(reply_to) = message.reply_to.as_deref() else {
            return ReplyAnnotation {
                from_name: from_name.to_string(),
                text: base_text.to_string(),
            };
        };

        let self_reply = self.is_own_message(reply_to);
        let header = match (self_reply, reply_to.text.as_deref()) {
            (true, Some(text)) => Some(ComposedMessage::parse(text)),
            _ => None,
        };

        let in_reply_to = match &header {
            Some(header) => self.mention_or_name(&header.display_name),
            None => self.resolver.resolve(reply_to.from.as_ref(), &message.chat),
        };

        let text = match (&header, reply_to.text.as_deref()) {
            (Some(header), _) => format!("{}\n{}", quote_excerpt(&header.body), base_text),
            (None, Some(replied)) => format!("{}\n{}", quote_excerpt(replied), base_text),
            (None, None) => base_text.to_string(),
        };

        ReplyAnnotation {
            from_name: format!("{} (in reply to {})", from_name, in_reply_to),
            text,
        }
    }

    fn is_own_message(&self, message: &InboundMessage) -> bool {
        matches!(&message.from, Some(Actor::User(user)) if user.id == self.bot.id)
    }

    fn mention_or_name(&self, display_name: &str) -> String {
        match self.members.find_member(display_name) {
            Some(member) => member.mention(),
            None => {
                tracing::debug!(display_name, "Replied-to Discord user not found, using plain name");
                display_name.to_string()
            }
        }
    }
}

/// Build the quoted excerpt: length cap, then line cap, then indentation
pub fn quote_excerpt(text: &str) -> String {
    let excerpt = cap_lines(&cap_length(text));
    format!("{}{}", QUOTE_PREFIX, excerpt.replace('\n', &format!("\n{}", QUOTE_PREFIX)))
}

/// Cut text longer than [`QUOTE_MAX_CHARS`] characters and mark the cut
pub fn cap_length(text: &str) -> String {
    match text.char_indices().nth(QUOTE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Cut text at its second newline, keeping at most [`QUOTE_MAX_LINES`] lines
pub fn cap_lines(text: &str) -> String {
    match text.match_indices('\n').nth(QUOTE_MAX_LINES - 1) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
