//! Outgoing-command parser
//!
//! `.afk [message]` and `.unafk` written by the account holder are the two
//! recognized commands. Anything else passes through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use afk_state::AfkEvent;

static AFK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.afk\s*(.*)$").expect("hard-coded pattern"));
static UNAFK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.unafk").expect("hard-coded pattern"));

/// Map outgoing message text to a presence event, if it is a command.
pub fn parse_command(text: &str) -> Option<AfkEvent> {
    if UNAFK_PATTERN.is_match(text) {
        return Some(AfkEvent::Deactivate);
    }
    if let Some(captures) = AFK_PATTERN.captures(text) {
        return Some(AfkEvent::Activate {
            message: captures[1].trim().to_string(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_afk_activates_without_message() {
        assert_eq!(
            parse_command(".afk"),
            Some(AfkEvent::Activate {
                message: String::new()
            })
        );
    }

    #[test]
    fn test_afk_with_reason_trims_the_payload() {
        assert_eq!(
            parse_command(".afk  busy now "),
            Some(AfkEvent::Activate {
                message: "busy now".to_string()
            })
        );
    }

    #[test]
    fn test_unafk_deactivates() {
        assert_eq!(parse_command(".unafk"), Some(AfkEvent::Deactivate));
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(parse_command("hello there"), None);
        assert_eq!(parse_command("afk without the dot"), None);
        assert_eq!(parse_command(""), None);
    }
}
