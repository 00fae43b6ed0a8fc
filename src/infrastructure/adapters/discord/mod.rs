//! Discord adapter - Markdown rendering and member lookup for the target side

mod markdown;
mod members;

pub use markdown::render_markdown;
pub use members::MemberDirectory;

use crate::domain::entities::{Bridge, MemberId, TextEntity};
use crate::domain::traits::{MemberLookup, TextRenderer};

/// Discord target backed by a static member directory
#[derive(Debug, Clone, Default)]
pub struct DiscordTarget {
    members: MemberDirectory,
}

impl DiscordTarget {
    pub fn new(members: MemberDirectory) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &MemberDirectory {
        &self.members
    }
}

impl TextRenderer for DiscordTarget {
    fn render_text(&self, text: Option<&str>, entities: &[TextEntity], bridge: &Bridge) -> String {
        let Some(text) = text else {
            return String::new();
        };
        tracing::trace!(bridge = %bridge.name, entities = entities.len(), "Rendering Telegram text");
        render_markdown(text, entities, &self.members)
    }
}

impl MemberLookup for DiscordTarget {
    fn find_member(&self, display_name: &str) -> Option<MemberId> {
        self.members.find_member(display_name)
    }
}
