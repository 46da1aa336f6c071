//! Core types for draws, combinations and tickets

use crate::error::{LotteryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Count of main numbers in a combination
pub const NUMBER_COUNT: usize = 5;

/// Count of stars in a combination
pub const STAR_COUNT: usize = 2;

/// One Euromillions draw as published by the results feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawResult {
    /// Draw date in the feed's format (ISO `YYYY-MM-DD`)
    pub date: String,

    /// Winning numbers in draw order
    pub numbers: Vec<String>,

    /// Winning stars in draw order
    pub stars: Vec<String>,

    /// Prize table, one entry per tier
    #[serde(default)]
    pub prizes: Vec<PrizeTier>,

    /// Someone hit the jackpot in this draw
    #[serde(default, rename = "has_winner")]
    pub jackpot_winner: bool,
}

impl DrawResult {
    /// Draw date as a calendar date, if the feed used the ISO format
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

/// A prize bracket keyed by matched numbers and matched stars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeTier {
    pub matched_numbers: u8,
    pub matched_stars: u8,

    /// Prize per winner in euros
    #[serde(rename = "prize")]
    pub amount: f64,

    pub winners: u64,
}

/// Prize won for a match, zero when no tier applies
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Prize {
    pub amount: f64,
    pub winners: u64,
}

impl Prize {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.amount > 0.0
    }
}

/// The player's chosen numbers and stars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCombination")]
pub struct PlayerCombination {
    numbers: Vec<String>,
    stars: Vec<String>,
}

impl PlayerCombination {
    /// Build a combination, rejecting anything but 5 numbers and 2 stars
    pub fn new(numbers: Vec<String>, stars: Vec<String>) -> Result<Self> {
        if numbers.len() != NUMBER_COUNT {
            return Err(LotteryError::InvalidCombination(format!(
                "expected {NUMBER_COUNT} numbers, got {}",
                numbers.len()
            )));
        }
        if stars.len() != STAR_COUNT {
            return Err(LotteryError::InvalidCombination(format!(
                "expected {STAR_COUNT} stars, got {}",
                stars.len()
            )));
        }
        Ok(Self { numbers, stars })
    }

    /// Parse comma separated lists such as `"1,2,3,4,5"` and `"01,12"`.
    ///
    /// Values are normalized to two digits.
    pub fn parse(numbers: &str, stars: &str) -> Result<Self> {
        Self::new(parse_values(numbers)?, parse_values(stars)?)
    }

    #[must_use]
    pub const fn numbers(&self) -> &[String] {
        self.numbers.as_slice()
    }

    #[must_use]
    pub const fn stars(&self) -> &[String] {
        self.stars.as_slice()
    }
}

/// Wire shape of a combination before the 5 + 2 check
#[derive(Deserialize)]
struct UncheckedCombination {
    numbers: Vec<String>,
    stars: Vec<String>,
}

impl TryFrom<UncheckedCombination> for PlayerCombination {
    type Error = LotteryError;

    fn try_from(raw: UncheckedCombination) -> Result<Self> {
        Self::new(raw.numbers, raw.stars)
    }
}

fn parse_values(list: &str) -> Result<Vec<String>> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    list.split(',')
        .map(|raw| {
            let raw = raw.trim();
            raw.parse::<u8>()
                .map(|n| format!("{n:02}"))
                .map_err(|_| LotteryError::InvalidCombination(format!("not a number: {raw:?}")))
        })
        .collect()
}

/// How many numbers and stars a combination shares with a draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_numbers: u8,
    pub matched_stars: u8,
}

impl MatchResult {
    /// Five numbers and both stars
    #[must_use]
    pub const fn is_jackpot(&self) -> bool {
        matches!((self.matched_numbers, self.matched_stars), (5, 2))
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.matched_numbers, self.matched_stars)
    }
}

/// Ticket details scraped from a purchase confirmation email.
///
/// Every field is optional; a partially filled record is a valid result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Main numbers, up to five
    pub numbers: Vec<String>,

    /// Stars, up to two
    pub stars: Vec<String>,

    /// El Millón code, three letters and five digits
    pub millon_code: Option<String>,

    /// El Millón draw date (or range)
    pub millon_date: Option<String>,

    /// Draw date or `"<from> - <to>"` range for multi-draw tickets
    pub draw_date: Option<String>,

    /// Price with currency code, e.g. `"2,50 EUR"`
    pub price: Option<String>,

    /// Number of bets on the ticket
    pub bet_count: String,

    /// Remaining account balance with currency symbol, e.g. `"12,50€"`
    pub balance: Option<String>,

    /// Ticket reference number
    pub reference: Option<String>,
}

impl Default for TicketRecord {
    fn default() -> Self {
        Self {
            numbers: Vec::new(),
            stars: Vec::new(),
            millon_code: None,
            millon_date: None,
            draw_date: None,
            price: None,
            bet_count: "1".to_string(),
            balance: None,
            reference: None,
        }
    }
}

impl TicketRecord {
    /// Ticket covers more than one draw
    #[must_use]
    pub fn is_multi_draw(&self) -> bool {
        self.draw_date.as_deref().is_some_and(|d| d.contains(" - "))
    }
}

/// Standalone HTML page wrapping the coupon fragment of an email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponDocument {
    /// Complete HTML document
    pub html: String,

    /// Container width in pixels
    pub width: u32,
}

impl fmt::Display for CouponDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}
