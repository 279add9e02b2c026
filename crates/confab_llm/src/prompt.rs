//! Prompt assembly: flatten a conversation into one completion prompt.

use confab_core::Message;

/// Framing sentence that opens every prompt.
pub const PREAMBLE: &str =
    "The following is a conversation between a user and a helpful AI assistant.";

/// Flatten `history` plus the pending user message into the prompt sent
/// to a completion backend.
///
/// Layout: the [`PREAMBLE`], one `User:` / `Assistant:` line per history
/// message in order, then the cue `User: <message>\nAssistant:` whose
/// trailing marker invites the model to continue as the assistant.
/// Message content is inserted verbatim — no escaping, no truncation —
/// so the output is a pure function of its inputs.
pub fn build_prompt(history: &[Message], user_message: &str) -> String {
    let mut prompt = String::new();
    prompt.push_str(PREAMBLE);
    prompt.push('\n');

    for message in history {
        prompt.push_str(message.role.label());
        prompt.push_str(": ");
        prompt.push_str(&message.content);
        prompt.push('\n');
    }

    prompt.push_str("User: ");
    prompt.push_str(user_message);
    prompt.push_str("\nAssistant:");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_core::Message;

    #[test]
    fn test_empty_history() {
        let prompt = build_prompt(&[], "hi");

        assert!(prompt.starts_with(PREAMBLE));
        assert!(prompt.ends_with("User: hi\nAssistant:"));
        assert_eq!(prompt, format!("{PREAMBLE}\nUser: hi\nAssistant:"));
    }

    #[test]
    fn test_history_order_preserved() {
        let history = vec![
            Message::user("hi"),
            Message::assistant("hello"),
            Message::user("how are you?"),
            Message::assistant("fine, thanks"),
        ];
        let prompt = build_prompt(&history, "good to hear");

        let hi = prompt.find("User: hi\n").unwrap();
        let hello = prompt.find("Assistant: hello\n").unwrap();
        let how = prompt.find("User: how are you?\n").unwrap();
        let fine = prompt.find("Assistant: fine, thanks\n").unwrap();
        assert!(hi < hello && hello < how && how < fine);

        assert!(prompt.ends_with("User: good to hear\nAssistant:"));
    }

    #[test]
    fn test_cue_has_no_trailing_space() {
        let prompt = build_prompt(&[], "hi");
        assert!(prompt.ends_with("Assistant:"));
        assert!(!prompt.ends_with("Assistant: "));
    }

    #[test]
    fn test_content_inserted_verbatim() {
        let history = vec![Message::assistant("notes:\n- a\n- b")];
        let prompt = build_prompt(&history, "ok: got it");

        // Embedded newlines and colons pass through untouched.
        assert!(prompt.contains("Assistant: notes:\n- a\n- b\n"));
        assert!(prompt.contains("User: ok: got it\nAssistant:"));
    }

    #[test]
    fn test_empty_user_message() {
        let prompt = build_prompt(&[], "");
        assert!(prompt.ends_with("User: \nAssistant:"));
    }

    #[test]
    fn test_deterministic() {
        let history = vec![Message::user("a"), Message::assistant("b")];
        assert_eq!(build_prompt(&history, "c"), build_prompt(&history, "c"));
    }
}
