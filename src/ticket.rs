//! Ticket field extraction from the vendor's confirmation email HTML.
//!
//! Each field is scraped independently by an ordered list of strategies;
//! the first strategy that yields a value wins. A field nobody could find
//! stays `None`, and extraction as a whole never fails.

use crate::types::{NUMBER_COUNT, STAR_COUNT, TicketRecord};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// A single way of scraping one field
type Strategy<T> = fn(&str) -> Option<T>;

/// Numbers and stars scraped together
type Combination = (Vec<String>, Vec<String>);

// Regex patterns. Case-insensitive except the El Millón code, which is
// uppercase only; `s` lets `.` cross the newlines the vendor template puts
// inside tags.
static BALANCE_AFTER_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)saldo actual es[:\s]*<[^>]*>\s*([\d,]+)\s*€").unwrap()
});

static BALANCE_INLINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)saldo actual es[:\s]*([\d,]+)\s*€").unwrap());

static BALL_CELL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<td([^>]*style="[^"]*width:\s*30px[^"]*"[^>]*)>\s*(\d{2})\s*</td>"#)
        .unwrap()
});

static CENTERED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)text-align:\s*center|align\s*=\s*"?center"#).unwrap()
});

static PLUS_CELL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td[^>]*>\s*\+\s*</td>").unwrap());

static ANY_CELL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td[^>]*>\s*(\d{2})\s*</td>").unwrap());

static MILLON_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]{3}\d{5})").unwrap());

static MILLON_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)game_millon_ticket\.gif.*?<p[^>]*>\s*(\d{1,2}\s+[A-Z]{3}\s+\d{2}(?:\s*-\s*\d{1,2}\s+[A-Z]{3}\s+\d{2})?)\s*</p>",
    )
    .unwrap()
});

static DRAW_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(\d{1,2}\s+[A-Z]{3}\s+\d{4}(?:\s*-\s*\d{1,2}\s+[A-Z]{3}\s+\d{4})?)")
        .unwrap()
});

static PRICE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)([\d,]+)\s*EUR").unwrap());

static BET_COUNT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)(\d+)\s*apuesta").unwrap());

static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(\d{5}-\d{4}-\d{5}-\d{5}-\d{5}-\d{5}-\d{5})").unwrap()
});

const BALANCE_STRATEGIES: &[Strategy<String>] = &[balance_after_tag, balance_inline];
const COMBINATION_STRATEGIES: &[Strategy<Combination>] =
    &[combination_by_separator, combination_by_range_scan];

/// Lowest and highest value a ball can take
const BALL_RANGE: std::ops::RangeInclusive<u8> = 1..=50;

impl TicketRecord {
    /// Scrape every ticket field from confirmation email HTML
    #[must_use]
    pub fn extract(html: &str) -> Self {
        let balance = first_success(html, BALANCE_STRATEGIES);
        if balance.is_none() {
            debug!("Balance not found");
        }

        let (numbers, stars) = first_success(html, COMBINATION_STRATEGIES).unwrap_or_else(|| {
            debug!("Combination not found");
            (Vec::new(), Vec::new())
        });

        let ticket = Self {
            numbers,
            stars,
            millon_code: first_capture(&MILLON_CODE_REGEX, html),
            millon_date: first_capture(&MILLON_DATE_REGEX, html),
            draw_date: first_capture(&DRAW_DATE_REGEX, html),
            price: first_capture(&PRICE_REGEX, html).map(|p| format!("{p} EUR")),
            bet_count: first_capture(&BET_COUNT_REGEX, html).unwrap_or_else(|| "1".to_string()),
            balance,
            reference: first_capture(&REFERENCE_REGEX, html),
        };

        debug!(
            "Extracted ticket: {} numbers, {} stars, ref {:?}",
            ticket.numbers.len(),
            ticket.stars.len(),
            ticket.reference
        );

        ticket
    }

    /// Check if nothing at all was extracted
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.numbers.is_empty()
            && self.stars.is_empty()
            && self.millon_code.is_none()
            && self.millon_date.is_none()
            && self.draw_date.is_none()
            && self.price.is_none()
            && self.balance.is_none()
            && self.reference.is_none()
    }
}

/// Run strategies in order and keep the first value produced
fn first_success<T>(html: &str, strategies: &[Strategy<T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(html))
}

fn first_capture(regex: &Regex, html: &str) -> Option<String> {
    regex
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// "Tu saldo actual es: <b>12,50 €"
fn balance_after_tag(html: &str) -> Option<String> {
    first_capture(&BALANCE_AFTER_TAG_REGEX, html).map(|b| format!("{b}€"))
}

/// "Tu saldo actual es 12,50 €"
fn balance_inline(html: &str) -> Option<String> {
    first_capture(&BALANCE_INLINE_REGEX, html).map(|b| format!("{b}€"))
}

/// Styled ball cells on either side of the `+` cell: the last five before
/// it are numbers, the first two after it are stars.
fn combination_by_separator(html: &str) -> Option<Combination> {
    let plus = PLUS_CELL_REGEX.find(html)?;
    let (before, after) = html.split_at(plus.start());

    let before = ball_cells(before);
    let numbers = before[before.len().saturating_sub(NUMBER_COUNT)..].to_vec();
    if numbers.is_empty() {
        debug!("Separator found but no ball cells before it");
        return None;
    }

    let stars = ball_cells(after).into_iter().take(STAR_COUNT).collect();
    Some((numbers, stars))
}

/// Any two-digit cell in the ball range; needs a full five plus two
fn combination_by_range_scan(html: &str) -> Option<Combination> {
    debug!("Falling back to range scan for combination");

    let values: Vec<String> = ANY_CELL_REGEX
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .filter(|v| v.parse::<u8>().is_ok_and(|n| BALL_RANGE.contains(&n)))
        .map(str::to_string)
        .collect();

    if values.len() < NUMBER_COUNT + STAR_COUNT {
        return None;
    }

    Some((
        values[..NUMBER_COUNT].to_vec(),
        values[NUMBER_COUNT..NUMBER_COUNT + STAR_COUNT].to_vec(),
    ))
}

fn ball_cells(html: &str) -> Vec<String> {
    BALL_CELL_REGEX
        .captures_iter(html)
        .filter(|cap| cap.get(1).is_some_and(|attrs| CENTERED_REGEX.is_match(attrs.as_str())))
        .filter_map(|cap| cap.get(2))
        .map(|m| m.as_str().to_string())
        .collect()
}
