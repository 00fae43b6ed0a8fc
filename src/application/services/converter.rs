//! Message conversion - Telegram message to Discord `{from, composed}`

use super::{annotate_forward, DisplayNameResolver, ReplyAnnotator};
use crate::domain::entities::{BotIdentity, Bridge, ComposedMessage, ConversionResult, InboundMessage};
use crate::domain::traits::TargetClient;

/// Settings that shape conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSettings {
    pub prefer_first_name: bool,
}

/// Converts Telegram messages for a Discord target.
///
/// Stateless apart from its inputs; one converter can serve any number of
/// messages, concurrently if the target allows it.
pub struct MessageConverter<'a, T: TargetClient + ?Sized> {
    bot: BotIdentity,
    settings: ConversionSettings,
    target: &'a T,
}

impl<'a, T: TargetClient + ?Sized> MessageConverter<'a, T> {
    pub fn new(bot: BotIdentity, settings: ConversionSettings, target: &'a T) -> Self {
        Self { bot, settings, target }
    }

    pub fn settings(&self) -> ConversionSettings {
        self.settings
    }

    /// Convert one message crossing `bridge`
    pub fn convert(&self, message: &InboundMessage, bridge: &Bridge) -> ConversionResult {
        let resolver = DisplayNameResolver::new(self.settings.prefer_first_name);

        let mut text = self
            .target
            .render_text(message.text.as_deref(), &message.entities, bridge);
        let mut from_name = resolver.resolve(message.from.as_ref(), &message.chat);

        if message.reply_to.is_some() {
            let annotation = ReplyAnnotator::new(resolver, self.bot, self.target)
                .annotate(message, &from_name, &text);
            from_name = annotation.from_name;
            text = annotation.text;
        }

        if let Some(source) = &message.forward_source {
            from_name = annotate_forward(source, &from_name, &resolver);
        }

        tracing::debug!(
            bridge = %bridge.name,
            message_id = message.id,
            from = %from_name,
            "Converted Telegram message"
        );

        ComposedMessage::new(from_name, text).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Channel, Chat, ChatKind, MemberId, TextEntity, User};
    use crate::domain::traits::{MemberLookup, TextRenderer};

    const BOT_ID: i64 = 999;

    /// Passes text through untouched and knows a single member
    struct PlainTarget;

    impl TextRenderer for PlainTarget {
        fn render_text(&self, text: Option<&str>, _entities: &[TextEntity], _bridge: &Bridge) -> String {
            text.unwrap_or_default().to_string()
        }
    }

    impl MemberLookup for PlainTarget {
        fn find_member(&self, display_name: &str) -> Option<MemberId> {
            (display_name == "Alice").then_some(MemberId(42))
        }
    }

    fn bridge() -> Bridge {
        Bridge::new("default", -1, 5555)
    }

    fn group() -> Chat {
        Chat::new(-1, ChatKind::Group)
    }

    fn convert(message: &InboundMessage, prefer_first_name: bool) -> ConversionResult {
        let settings = ConversionSettings { prefer_first_name };
        MessageConverter::new(BotIdentity::new(BOT_ID), settings, &PlainTarget).convert(message, &bridge())
    }

    #[test]
    fn test_plain_message() {
        let message = InboundMessage::new(1, group())
            .with_from(User::new(1).with_username("bob"))
            .with_text("hi");
        let result = convert(&message, false);
        assert_eq!(result.from_name(), "bob");
        assert_eq!(result.composed(), "**bob**\nhi");
    }

    #[test]
    fn test_plain_message_has_no_annotation() {
        let message = InboundMessage::new(1, group())
            .with_from(User::new(1).with_username("bob").with_first_name("Bob"))
            .with_text("line one\nline two");
        let result = convert(&message, true);
        assert_eq!(result.from_name(), "Bob");
        assert_eq!(result.composed(), format!("**{}**\n{}", result.from_name(), "line one\nline two"));
    }

    #[test]
    fn test_missing_text_renders_empty_body() {
        let message = InboundMessage::new(1, group()).with_from(User::new(1).with_username("bob"));
        assert_eq!(convert(&message, false).composed(), "**bob**\n");
    }

    #[test]
    fn test_channel_post() {
        let chat = Chat::new(-100, ChatKind::Channel).with_title("News");
        let message = InboundMessage::new(1, chat).with_text("breaking");
        assert_eq!(convert(&message, false).composed(), "**News**\nbreaking");
    }

    #[test]
    fn test_reply_and_forward_compose() {
        let replied = InboundMessage::new(1, group())
            .with_from(User::new(5).with_username("carol"))
            .with_text("original");
        let message = InboundMessage::new(2, group())
            .with_from(User::new(1).with_username("bob"))
            .with_text("look")
            .with_reply_to(replied)
            .with_forward_source(Channel::new(-100, "News"));
        let result = convert(&message, false);
        assert_eq!(result.from_name(), "News (forwarded by bob (in reply to carol))");
        assert_eq!(result.body(), "  > original\nlook");
        assert_eq!(
            result.composed(),
            "**News (forwarded by bob (in reply to carol))**\n  > original\nlook"
        );
    }

    #[test]
    fn test_self_reply_mentions_member() {
        let replied = InboundMessage::new(1, group())
            .with_from(User::new(BOT_ID).with_username("bridge_bot"))
            .with_text("**Alice**\nHello");
        let message = InboundMessage::new(2, group())
            .with_from(User::new(1).with_username("bob"))
            .with_text("hey")
            .with_reply_to(replied);
        let result = convert(&message, false);
        assert_eq!(result.from_name(), "bob (in reply to <@42>)");
        assert_eq!(result.composed(), "**bob (in reply to <@42>)**\n  > Hello\nhey");
    }

    #[test]
    fn test_composed_output_parses_back() {
        let message = InboundMessage::new(1, group())
            .with_from(User::new(1).with_username("bob"))
            .with_text("hi\nthere");
        let result = convert(&message, false);
        assert_eq!(ComposedMessage::parse(result.composed()), result.parts());
    }
}
