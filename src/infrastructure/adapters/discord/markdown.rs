//! Telegram entities to Discord Markdown

use crate::domain::entities::{EntityKind, TextEntity};
use crate::domain::traits::MemberLookup;

/// Render `text` with its entities applied as Discord Markdown.
///
/// Entity offsets count UTF-16 code units. Entities overlapping an earlier one
/// or reaching past the end of the text are left unformatted.
pub fn render_markdown<L: MemberLookup + ?Sized>(text: &str, entities: &[TextEntity], members: &L) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();

    let mut sorted: Vec<&TextEntity> = entities.iter().collect();
    sorted.sort_by_key(|entity| entity.offset);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for entity in sorted {
        let end = match entity.offset.checked_add(entity.length) {
            Some(end) if entity.offset >= cursor && end <= units.len() => end,
            _ => {
                tracing::debug!(?entity, "Skipping overlapping or out-of-range entity");
                continue;
            }
        };

        out.push_str(&String::from_utf16_lossy(&units[cursor..entity.offset]));
        let inner = String::from_utf16_lossy(&units[entity.offset..end]);
        out.push_str(&format_entity(&entity.kind, &inner, members));
        cursor = end;
    }

    out.push_str(&String::from_utf16_lossy(&units[cursor..]));
    out
}

fn format_entity<L: MemberLookup + ?Sized>(kind: &EntityKind, inner: &str, members: &L) -> String {
    match kind {
        EntityKind::Bold => format!("**{}**", inner),
        EntityKind::Italic => format!("*{}*", inner),
        EntityKind::Underline => format!("__{}__", inner),
        EntityKind::Strikethrough => format!("~~{}~~", inner),
        EntityKind::Code => format!("`{}`", inner),
        EntityKind::Pre { language } => {
            format!("```{}\n{}\n```", language.as_deref().unwrap_or_default(), inner)
        }
        EntityKind::TextLink { url } => format!("[{}]({})", inner, url),
        EntityKind::Mention => {
            let name = inner.trim_start_matches('@');
            match members.find_member(name) {
                Some(member) => member.mention(),
                None => inner.to_string(),
            }
        }
        EntityKind::Other(_) => inner.to_string(),
    }
}
