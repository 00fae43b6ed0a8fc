//! End-to-end conversion tests: Telegram JSON in, Discord text out
//! Run with: cargo test --test converter_test

use std::sync::Once;

use tgdc_bridge::infrastructure::adapters::telegram::parse_message;
use tgdc_bridge::infrastructure::config::Config;
use tgdc_bridge::{ConversionResult, MessageConverter};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

const CONFIG: &str = r#"
telegram:
  bot-id: 999
discord:
  members:
    Alice: 42
    alice: 43
bridges:
  - name: default
    telegram-chat-id: -1001
    discord-channel-id: 5555
"#;

fn convert_json(json: &str, config: &Config) -> ConversionResult {
    ensure_init();
    let message = parse_message(json).expect("valid telegram message");
    let target = config.discord_target();
    let bot = config.bot_identity().expect("bot id configured");
    let bridge = config.bridge(None).expect("bridge configured");
    MessageConverter::new(bot, config.settings(), &target).convert(&message, bridge)
}

fn config() -> Config {
    Config::from_yaml(CONFIG).expect("valid config")
}

#[test]
fn test_plain_group_message() {
    let result = convert_json(
        r#"{
            "message_id": 1,
            "from": {"id": 1, "first_name": "Bob", "username": "bob"},
            "chat": {"id": -1001, "type": "group"},
            "text": "hi"
        }"#,
        &config(),
    );
    assert_eq!(result.from_name(), "bob");
    assert_eq!(result.composed(), "**bob**\nhi");
}

#[test]
fn test_first_name_setting() {
    let mut config = config();
    config.telegram.use_first_name_instead_of_username = true;
    let result = convert_json(
        r#"{
            "message_id": 1,
            "from": {"id": 1, "first_name": "Bob", "username": "bob"},
            "chat": {"id": -1001, "type": "supergroup"},
            "text": "hi"
        }"#,
        &config,
    );
    assert_eq!(result.composed(), "**Bob**\nhi");
}

#[test]
fn test_entities_and_mentions_rendered() {
    let result = convert_json(
        r#"{
            "message_id": 1,
            "from": {"id": 1, "first_name": "Bob"},
            "chat": {"id": -1001, "type": "group"},
            "text": "ping @alice now",
            "entities": [
                {"type": "mention", "offset": 5, "length": 6},
                {"type": "bold", "offset": 12, "length": 3}
            ]
        }"#,
        &config(),
    );
    assert_eq!(result.composed(), "**Bob**\nping <@43> **now**");
}

#[test]
fn test_long_reply_is_truncated() {
    let long = "x".repeat(250);
    let json = format!(
        r#"{{
            "message_id": 2,
            "from": {{"id": 1, "first_name": "Bob", "username": "bob"}},
            "chat": {{"id": -1001, "type": "group"}},
            "text": "agreed",
            "reply_to_message": {{
                "message_id": 1,
                "from": {{"id": 5, "first_name": "Carol"}},
                "chat": {{"id": -1001, "type": "group"}},
                "text": "{}"
            }}
        }}"#,
        long
    );
    let result = convert_json(&json, &config());
    assert_eq!(result.from_name(), "bob (in reply to Carol)");
    assert_eq!(result.body(), format!("  > {}…\nagreed", "x".repeat(100)));
}

#[test]
fn test_multiline_reply_keeps_two_lines() {
    let result = convert_json(
        r#"{
            "message_id": 2,
            "from": {"id": 1, "username": "bob"},
            "chat": {"id": -1001, "type": "group"},
            "text": "yes",
            "reply_to_message": {
                "message_id": 1,
                "from": {"id": 5, "username": "carol"},
                "chat": {"id": -1001, "type": "group"},
                "text": "a\nb\nc\nd"
            }
        }"#,
        &config(),
    );
    assert_eq!(result.composed(), "**bob (in reply to carol)**\n  > a\n  > b…\nyes");
}

#[test]
fn test_reply_to_bridged_discord_message() {
    let reply = |name: &str| {
        format!(
            r#"{{
                "message_id": 2,
                "from": {{"id": 1, "username": "bob"}},
                "chat": {{"id": -1001, "type": "group"}},
                "text": "hey",
                "reply_to_message": {{
                    "message_id": 1,
                    "from": {{"id": 999, "is_bot": true, "first_name": "Bridge", "username": "bridge_bot"}},
                    "chat": {{"id": -1001, "type": "group"}},
                    "text": "**{}**\nHello"
                }}
            }}"#,
            name
        )
    };

    let known = convert_json(&reply("Alice"), &config());
    assert_eq!(known.from_name(), "bob (in reply to <@42>)");
    assert_eq!(known.body(), "  > Hello\nhey");

    let unknown = convert_json(&reply("Zed"), &config());
    assert_eq!(unknown.from_name(), "bob (in reply to Zed)");
}

#[test]
fn test_forwarded_reply() {
    let result = convert_json(
        r#"{
            "message_id": 3,
            "from": {"id": 1, "username": "bob"},
            "chat": {"id": -1001, "type": "group"},
            "text": "fwd",
            "forward_from_chat": {"id": -100, "type": "channel", "title": "Daily News"},
            "reply_to_message": {
                "message_id": 1,
                "from": {"id": 5, "username": "carol"},
                "chat": {"id": -1001, "type": "group"}
            }
        }"#,
        &config(),
    );
    assert_eq!(result.from_name(), "Daily News (forwarded by bob (in reply to carol))");
    assert_eq!(result.body(), "fwd");
}

#[test]
fn test_channel_post_uses_title() {
    let result = convert_json(
        r#"{
            "update_id": 10,
            "channel_post": {
                "message_id": 4,
                "chat": {"id": -100, "type": "channel", "title": "Daily News"},
                "text": "headline"
            }
        }"#,
        &config(),
    );
    assert_eq!(result.composed(), "**Daily News**\nheadline");
}
