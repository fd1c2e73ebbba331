//! Contact channel taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Medium of contact.
///
/// Forecast column labels encode the channel as a prefix
/// (`"Phone Billing Support"`); labels with no recognized prefix
/// belong to [`Channel::Unknown`] rather than being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Chat contacts
    Chat,

    /// Phone contacts
    Phone,

    /// Email contacts
    Email,

    /// Remote-assistance contacts
    Remote,

    /// Label carried no recognized channel prefix
    Unknown,
}

/// Recognized channel prefixes, checked at the start of a column
/// label. The four prefixes are mutually non-prefixing, so the table
/// order does not affect which one matches.
const CHANNEL_PREFIXES: [(&str, Channel); 4] = [
    ("Chat", Channel::Chat),
    ("Phone", Channel::Phone),
    ("Email", Channel::Email),
    ("Remote", Channel::Remote),
];

impl Channel {
    /// Returns all channels, including `Unknown`.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Chat,
            Self::Phone,
            Self::Email,
            Self::Remote,
            Self::Unknown,
        ]
    }

    /// Returns the channel name used in frames and displays.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Remote => "Remote",
            Self::Unknown => "Unknown",
        }
    }

    /// Split a forecast column label into channel and line of business.
    ///
    /// A label starting with a recognized prefix yields that channel
    /// and the remainder (leading whitespace trimmed) as the LOB. Any
    /// other label yields `Unknown` with the whole label as the LOB.
    pub fn split_label(label: &str) -> (Self, String) {
        for (prefix, channel) in CHANNEL_PREFIXES {
            if let Some(rest) = label.strip_prefix(prefix) {
                return (channel, rest.trim_start().to_string());
            }
        }
        (Self::Unknown, label.to_string())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Phone Billing Support", Channel::Phone, "Billing Support")]
    #[case("Chat Sales", Channel::Chat, "Sales")]
    #[case("Email Tech", Channel::Email, "Tech")]
    #[case("Remote Assist", Channel::Remote, "Assist")]
    #[case("Loyalty Program", Channel::Unknown, "Loyalty Program")]
    #[case("ChatSales", Channel::Chat, "Sales")]
    #[case("", Channel::Unknown, "")]
    fn test_split_label(#[case] label: &str, #[case] channel: Channel, #[case] lob: &str) {
        assert_eq!(Channel::split_label(label), (channel, lob.to_string()));
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        let (channel, lob) = Channel::split_label("Support Chat");
        assert_eq!(channel, Channel::Unknown);
        assert_eq!(lob, "Support Chat");
    }

    #[test]
    fn test_all_includes_unknown() {
        assert_eq!(Channel::all().len(), 5);
        assert!(Channel::all().contains(&Channel::Unknown));
    }

    #[test]
    fn test_display() {
        assert_eq!(Channel::Phone.to_string(), "Phone");
    }
}
