//! Telegram adapter - Bot API payloads mapped onto domain messages

use serde::{Deserialize, Serialize};

use crate::application::errors::ParseError;
use crate::domain::entities::{
    Actor, Channel, Chat as DomainChat, ChatKind, EntityKind, InboundMessage, TextEntity, User as DomainUser,
};

/// Telegram update type
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub channel_post: Option<Message>,
}

impl Update {
    /// The message carried by this update, channel posts included
    pub fn into_message(self) -> Option<Message> {
        self.message.or(self.channel_post)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
    #[serde(default)]
    pub entities: Vec<MessageEntity>,
    pub reply_to_message: Option<Box<Message>>,
    pub forward_from: Option<User>,
    pub forward_from_chat: Option<Chat>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: usize,
    pub length: usize,
    pub url: Option<String>,
    pub language: Option<String>,
}

/// Parse a raw Bot API message or update into a domain message
pub fn parse_message(json: &str) -> Result<InboundMessage, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let message: Message = if value.get("update_id").is_some() {
        serde_json::from_value::<Update>(value)?
            .into_message()
            .ok_or_else(|| ParseError::MissingField("message".to_string()))?
    } else {
        serde_json::from_value(value)?
    };

    message.into_domain()
}

impl Message {
    pub fn into_domain(self) -> Result<InboundMessage, ParseError> {
        let chat = self.chat.into_domain()?;

        // A forwarded user takes precedence over a forwarded chat
        let forward_source = match (self.forward_from, self.forward_from_chat) {
            (Some(user), _) => Some(Actor::User(user.into())),
            (None, Some(chat)) => Some(Actor::Channel(chat.into())),
            (None, None) => None,
        };

        let reply_to = match self.reply_to_message {
            Some(reply) => Some(Box::new(reply.into_domain()?)),
            None => None,
        };

        Ok(InboundMessage {
            id: self.message_id,
            text: self.text,
            entities: self.entities.into_iter().map(TextEntity::from).collect(),
            from: self.from.map(|user| Actor::User(user.into())),
            chat,
            reply_to,
            forward_source,
        })
    }
}

impl Chat {
    fn into_domain(self) -> Result<DomainChat, ParseError> {
        let kind = ChatKind::parse(&self.kind).ok_or(ParseError::UnknownChatType(self.kind))?;
        Ok(DomainChat {
            id: self.id,
            kind,
            title: self.title,
        })
    }
}

impl From<User> for DomainUser {
    fn from(user: User) -> Self {
        DomainUser {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
        }
    }
}

impl From<Chat> for Channel {
    fn from(chat: Chat) -> Self {
        Channel::new(chat.id, chat.title.unwrap_or_default())
    }
}

impl From<MessageEntity> for TextEntity {
    fn from(entity: MessageEntity) -> Self {
        let kind = match entity.kind.as_str() {
            "bold" => EntityKind::Bold,
            "italic" => EntityKind::Italic,
            "underline" => EntityKind::Underline,
            "strikethrough" => EntityKind::Strikethrough,
            "code" => EntityKind::Code,
            "pre" => EntityKind::Pre {
                language: entity.language,
            },
            "text_link" => match entity.url {
                Some(url) => EntityKind::TextLink { url },
                None => EntityKind::Other(entity.kind),
            },
            "mention" => EntityKind::Mention,
            _ => EntityKind::Other(entity.kind),
        };

        TextEntity::new(kind, entity.offset, entity.length)
    }
}
