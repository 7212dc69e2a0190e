//! Feed renderer
//!
//! Renders feeds and the message board to markdown text. No derived values
//! are computed here; everything shown comes from the normalizer or the
//! board.

use crate::app::{FeedState, MessageBoard};
use crate::domain::entities::{Capability, Collection, ComposedMessage, NormalizedDisplayItem};

/// Which part of the message board to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardFilter {
    #[default]
    All,
    Important,
}

#[derive(Debug, Clone, Copy)]
pub struct FeedRenderer {
    capability: Capability,
}

impl FeedRenderer {
    pub fn new(capability: Capability) -> Self {
        Self { capability }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Render one collection in whatever state its view is in
    pub fn render_feed(&self, collection: Collection, state: &FeedState) -> String {
        let mut buf = String::new();

        buf.push_str(&format!("# {}\n\n", collection.title()));

        match state {
            FeedState::Loading => {
                buf.push_str(&format!("_Loading {}..._\n", collection));
            }
            FeedState::Failed(reason) => {
                buf.push_str(&format!("_Could not load {}: {}._\n\n", collection, reason));
                buf.push_str("Run the command again to retry.\n");
            }
            FeedState::Loaded(items) if items.is_empty() => {
                buf.push_str(empty_placeholder(collection));
                buf.push('\n');
            }
            FeedState::Loaded(items) => {
                for (i, item) in items.iter().enumerate() {
                    let card = match collection {
                        Collection::Jobs => self.render_job(i + 1, item),
                        Collection::Notices => self.render_notice(item),
                        Collection::Interviews => self.render_interview(i + 1, item),
                    };
                    buf.push_str(&card);
                    buf.push('\n');
                }
            }
        }

        if self.capability.can_compose() && collection == Collection::Notices {
            buf.push_str("\n---\n\n");
            buf.push_str("## Admin\n\n");
            buf.push_str("- `placement board --role admin` - Compose a message for students\n");
        }

        buf
    }

    /// Render the local message board
    pub fn render_board(&self, board: &MessageBoard, filter: BoardFilter) -> String {
        let mut buf = String::new();

        let messages: Vec<&ComposedMessage> = match filter {
            BoardFilter::All => {
                buf.push_str("# Admin Messages\n\n");
                board.list_all().iter().collect()
            }
            BoardFilter::Important => {
                buf.push_str("# Important Messages\n\n");
                board.list_important()
            }
        };

        if messages.is_empty() {
            match filter {
                BoardFilter::All => buf.push_str("_No messages yet._\n"),
                BoardFilter::Important => buf.push_str("_No important messages._\n"),
            }
        } else {
            for message in messages {
                buf.push_str(&render_message(message));
            }
        }

        buf.push_str("\n---\n\n");
        if self.capability.can_compose() {
            buf.push_str("## Commands\n\n");
            buf.push_str("- Type a message and press enter to post it\n");
            buf.push_str("- `/all` - Show every message\n");
            buf.push_str("- `/important` - Show important messages only\n");
            buf.push_str("- `/quit` - End the session\n");
        } else {
            buf.push_str("_Posting messages requires the admin role._\n");
        }

        buf
    }

    fn render_job(&self, index: usize, item: &NormalizedDisplayItem) -> String {
        let title = item.title.as_deref().unwrap_or("Untitled position");
        let company = item
            .company
            .as_ref()
            .map(|c| format!(" @ {}", c))
            .unwrap_or_default();

        let mut meta_parts = Vec::new();
        meta_parts.push(
            item.salary
                .as_ref()
                .map(|s| format!("Salary: {}", s))
                .unwrap_or_else(|| "Salary: not disclosed".to_string()),
        );
        if !item.tag.is_empty() {
            meta_parts.push(format!("Batch: {}", item.tag));
        }
        meta_parts.push(format!("Posted {} by {}", item.age_label(), item.author_name));

        let mut card = format!(
            "[{}] {}{}{}\n    {}\n",
            index,
            title,
            company,
            importance_marker(item),
            meta_parts.join(" | ")
        );
        if !item.body.is_empty() {
            card.push_str(&format!("    {}\n", item.body));
        }
        card.push_str(&self.admin_footer(item));
        card
    }

    fn render_notice(&self, item: &NormalizedDisplayItem) -> String {
        let icon = if item.important { "[!]" } else { "[ ]" };
        let body = if item.body.is_empty() {
            "(empty notice)"
        } else {
            item.body.as_str()
        };

        let mut card = format!(
            "{} {}\n    by {}, {}\n",
            icon,
            body,
            item.author_name,
            item.age_label()
        );
        card.push_str(&self.admin_footer(item));
        card
    }

    fn render_interview(&self, index: usize, item: &NormalizedDisplayItem) -> String {
        let company = item.company.as_deref().unwrap_or("Unknown company");
        let role = item
            .title
            .as_ref()
            .map(|t| format!(": {}", t))
            .unwrap_or_default();

        let mut card = format!("[{}] {}{}{}\n", index, company, role, importance_marker(item));
        if !item.body.is_empty() {
            card.push_str(&format!("    {}\n", item.body));
        }
        card.push_str(&format!(
            "    Shared by {}, {}\n",
            item.author_name,
            item.age_label()
        ));
        card.push_str(&self.admin_footer(item));
        card
    }

    fn admin_footer(&self, item: &NormalizedDisplayItem) -> String {
        if self.capability.can_compose() {
            format!("    id: {}\n", item.id)
        } else {
            String::new()
        }
    }
}

fn empty_placeholder(collection: Collection) -> &'static str {
    match collection {
        Collection::Jobs => "_No jobs posted yet._",
        Collection::Notices => "_No notices right now._",
        Collection::Interviews => "_No interview experiences shared yet._",
    }
}

fn importance_marker(item: &NormalizedDisplayItem) -> &'static str {
    if item.important {
        " [IMPORTANT]"
    } else {
        ""
    }
}

fn render_message(message: &ComposedMessage) -> String {
    let flag = if message.important {
        "[IMPORTANT] "
    } else {
        ""
    };

    format!(
        "{}{}: {}\n    {}\n",
        flag,
        message.sender,
        message.body,
        message.composed_at.format("%Y-%m-%d %H:%M UTC")
    )
}
