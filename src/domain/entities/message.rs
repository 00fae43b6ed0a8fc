use super::Actor;

/// Type of the chat a message was posted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatKind {
    pub fn as_str(&self) -> &str {
        match self {
            ChatKind::Private => "private",
            ChatKind::Group => "group",
            ChatKind::Supergroup => "supergroup",
            ChatKind::Channel => "channel",
        }
    }

    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "private" => Some(ChatKind::Private),
            "group" => Some(ChatKind::Group),
            "supergroup" => Some(ChatKind::Supergroup),
            "channel" => Some(ChatKind::Channel),
            _ => None,
        }
    }
}

/// The chat context a message lives in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
    pub title: Option<String>,
}

impl Chat {
    pub fn new(id: i64, kind: ChatKind) -> Self {
        Self {
            id,
            kind,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_channel(&self) -> bool {
        self.kind == ChatKind::Channel
    }
}

/// Lets an actor stand in as its own chat context. Users map to a private
/// chat, channels to a channel chat carrying their title.
impl From<&Actor> for Chat {
    fn from(actor: &Actor) -> Self {
        match actor {
            Actor::User(user) => Chat::new(user.id, ChatKind::Private),
            Actor::Channel(channel) => {
                Chat::new(channel.id, ChatKind::Channel).with_title(channel.title.clone())
            }
        }
    }
}

/// Kind of formatting span
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre { language: Option<String> },
    TextLink { url: String },
    Mention,
    Other(String),
}

/// A formatting span; offsets and lengths count UTF-16 code units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntity {
    pub kind: EntityKind,
    pub offset: usize,
    pub length: usize,
}

impl TextEntity {
    pub fn new(kind: EntityKind, offset: usize, length: usize) -> Self {
        Self { kind, offset, length }
    }
}

/// A message as received from Telegram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub id: i64,
    pub text: Option<String>,
    pub entities: Vec<TextEntity>,
    pub from: Option<Actor>,
    pub chat: Chat,
    pub reply_to: Option<Box<InboundMessage>>,
    pub forward_source: Option<Actor>,
}

impl InboundMessage {
    pub fn new(id: i64, chat: Chat) -> Self {
        Self {
            id,
            text: None,
            entities: Vec::new(),
            from: None,
            chat,
            reply_to: None,
            forward_source: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_entities(mut self, entities: Vec<TextEntity>) -> Self {
        self.entities = entities;
        self
    }

    pub fn with_from(mut self, actor: impl Into<Actor>) -> Self {
        self.from = Some(actor.into());
        self
    }

    pub fn with_reply_to(mut self, message: InboundMessage) -> Self {
        self.reply_to = Some(Box::new(message));
        self
    }

    pub fn with_forward_source(mut self, actor: impl Into<Actor>) -> Self {
        self.forward_source = Some(actor.into());
        self
    }
}
