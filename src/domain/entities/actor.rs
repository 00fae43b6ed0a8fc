/// A message sender on the source platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    User(User),
    Channel(Channel),
}

impl Actor {
    /// Numeric user id, `None` for channels
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Actor::User(user) => Some(user.id),
            Actor::Channel(_) => None,
        }
    }
}

impl From<User> for Actor {
    fn from(user: User) -> Self {
        Actor::User(user)
    }
}

impl From<Channel> for Actor {
    fn from(channel: Channel) -> Self {
        Actor::Channel(channel)
    }
}

/// Represents a Telegram user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl User {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            first_name: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Username, treating an empty string as absent
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }

    /// First name, treating an empty string as absent
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// A broadcast channel posting under its own title
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Channel {
    pub id: i64,
    pub title: String,
}

impl Channel {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
