//! Display-name resolution for Telegram actors

use crate::domain::entities::{Actor, Chat, User};

/// Decides how a user or channel is labelled on the Discord side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayNameResolver {
    prefer_first_name: bool,
}

impl DisplayNameResolver {
    pub fn new(prefer_first_name: bool) -> Self {
        Self { prefer_first_name }
    }

    pub fn prefers_first_name(&self) -> bool {
        self.prefer_first_name
    }

    /// Resolve the name of `actor` as seen in `chat`.
    ///
    /// In a channel the channel title wins regardless of the actor. Anywhere
    /// else users are labelled by username, or by first name when that is
    /// preferred or the username is missing. A user with neither name falls
    /// back to its numeric id.
    pub fn resolve(&self, actor: Option<&Actor>, chat: &Chat) -> String {
        if chat.is_channel() {
            return chat.title.clone().unwrap_or_default();
        }

        match actor {
            Some(Actor::User(user)) => self.resolve_user(user),
            Some(Actor::Channel(channel)) => channel.title.clone(),
            None => String::new(),
        }
    }

    fn resolve_user(&self, user: &User) -> String {
        let name = match user.username() {
            Some(username) if !self.prefer_first_name => Some(username),
            username => user.first_name().or(username),
        };

        match name {
            Some(name) => name.to_string(),
            None => {
                tracing::debug!(user_id = user.id, "User has no username or first name, using id");
                user.id.to_string()
            }
        }
    }
}
