//! Plain-text rendering of edit and delete notifications.
//!
//! Pure string builders consumed by the edit/delete handlers; the sink
//! decides where the text ends up.

use chrono::{DateTime, Utc};
use message_cache::{Attachment, MessageRecord};

/// Renders the "message edited" notification with before/after bodies and
/// their attachment lists.
pub fn edit_notification(before: &MessageRecord, after: &MessageRecord) -> String {
    let mut lines = vec![
        "Message edited".to_string(),
        format!("channel: {}  author: {}", after.channel_id, after.author_id),
        format!("created: {}", format_time(before.created_at())),
        format!("before: {}", body_with_sticker(before)),
    ];
    push_attachment_lines(&mut lines, &before.attachments);
    lines.push(format!("after: {}", body_with_sticker(after)));
    push_attachment_lines(&mut lines, &after.attachments);
    lines.join("\n")
}

/// Renders the "message deleted" notification with the last known state.
pub fn delete_notification(removed: &MessageRecord) -> String {
    let mut lines = vec![
        "Message deleted".to_string(),
        format!(
            "channel: {}  author: {}",
            removed.channel_id, removed.author_id
        ),
        format!("created: {}", format_time(removed.created_at())),
        format!("content: {}", body_with_sticker(removed)),
    ];
    push_attachment_lines(&mut lines, &removed.attachments);
    lines.join("\n")
}

fn body_with_sticker(record: &MessageRecord) -> String {
    match record.sticker_id {
        Some(sticker_id) => format!("{} [sticker {}]", record.content, sticker_id),
        None => record.content.clone(),
    }
}

fn push_attachment_lines(lines: &mut Vec<String>, attachments: &[Attachment]) {
    if attachments.is_empty() {
        return;
    }
    lines.push(format!("attachments ({}):", attachments.len()));
    for attachment in attachments {
        if attachment.spoiler {
            lines.push(format!("  {} (spoiler)", attachment.url));
        } else {
            lines.push(format!("  {}", attachment.url));
        }
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, content: &str) -> MessageRecord {
        MessageRecord::new(id, 7, 9, content.to_string(), None, Vec::new())
    }

    #[test]
    fn test_edit_notification_contains_both_states() {
        let text = edit_notification(&record(1, "old words"), &record(1, "new words"));
        assert!(text.starts_with("Message edited"));
        assert!(text.contains("before: old words"));
        assert!(text.contains("after: new words"));
        assert!(text.contains("channel: 7  author: 9"));
    }

    #[test]
    fn test_delete_notification_contains_last_state() {
        let mut removed = record(1, "gone");
        removed.attachments.push(Attachment {
            url: "https://cdn.example/a.png".to_string(),
            spoiler: true,
        });
        let text = delete_notification(&removed);
        assert!(text.starts_with("Message deleted"));
        assert!(text.contains("content: gone"));
        assert!(text.contains("attachments (1):"));
        assert!(text.contains("https://cdn.example/a.png (spoiler)"));
    }

    #[test]
    fn test_sticker_rendered_with_body() {
        let mut r = record(1, "look");
        r.sticker_id = Some(77);
        let text = delete_notification(&r);
        assert!(text.contains("content: look [sticker 77]"));
    }
}
