//! Decoding the ticket confirmation email

use crate::error::{LotteryError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The parts of a confirmation email the extractors need
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketEmail {
    /// Bare sender address, without display name
    pub from: Option<String>,

    pub subject: Option<String>,

    /// First text/html part, decoded per its charset
    pub html: String,
}

impl TicketEmail {
    /// Parse raw RFC 822 bytes
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let parsed =
            mailparse::parse_mail(raw).map_err(|e| LotteryError::Structure(e.to_string()))?;

        let from = header_value(&parsed.headers, "from").map(|v| bare_address(&v));
        let subject = header_value(&parsed.headers, "subject");
        let html = find_html(&parsed).ok_or(LotteryError::NoHtml)?;

        debug!(
            "Parsed email {:?} from {:?} ({} bytes of HTML)",
            subject,
            from,
            html.len()
        );

        Ok(Self {
            from,
            subject,
            html,
        })
    }

    /// Check the sender, ignoring case
    #[must_use]
    pub fn is_from(&self, sender: &str) -> bool {
        self.from
            .as_deref()
            .is_some_and(|from| from.eq_ignore_ascii_case(sender.trim()))
    }
}

fn header_value(headers: &[mailparse::MailHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case(name))
        .map(mailparse::MailHeader::get_value)
}

// "Loterías <envios@...>" -> "envios@..."
fn bare_address(value: &str) -> String {
    let value = value.trim();
    match (value.find('<'), value.rfind('>')) {
        (Some(start), Some(end)) if start < end => value[start + 1..end].trim().to_string(),
        _ => value.to_string(),
    }
}

/// Depth-first search for the first text/html leaf
fn find_html(part: &mailparse::ParsedMail) -> Option<String> {
    if part.subparts.is_empty() {
        if part.ctype.mimetype.eq_ignore_ascii_case("text/html") {
            return part.get_body().ok();
        }
        return None;
    }

    part.subparts.iter().find_map(find_html)
}
