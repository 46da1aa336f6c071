// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Euromillions notifier
//!
//! Checks the latest Euromillions draw against a player's combination and
//! scrapes ticket confirmation emails, producing chat-ready messages.
//!
//! # Features
//!
//! - Set-based match counting and prize tier lookup
//! - Best-effort ticket field scraping with per-field fallbacks
//! - Coupon fragment extraction into a standalone renderable page
//! - Markdown-safe message formatting
//!
//! Fetching, mailbox access, rendering and delivery are supplied by the
//! caller through the traits in [`notify`].
//!
//! # Example
//!
//! ```rust
//! use lottery_notify::{DrawResult, PlayerCombination, evaluate, find_prize};
//!
//! let chosen = PlayerCombination::parse("3,7,12,19,41", "2,9").unwrap();
//! let draw = DrawResult {
//!     date: "2026-01-23".into(),
//!     numbers: ["07", "12", "19", "20", "41"].map(String::from).to_vec(),
//!     stars: ["02", "11"].map(String::from).to_vec(),
//!     prizes: Vec::new(),
//!     jackpot_winner: false,
//! };
//!
//! let result = evaluate(&chosen, &draw);
//! assert_eq!((result.matched_numbers, result.matched_stars), (4, 1));
//! assert_eq!(find_prize(&draw.prizes, result).amount, 0.0);
//! ```

mod config;
mod coupon;
mod draw;
mod error;
mod format;
mod mail;
mod matcher;
pub mod notify;
mod ticket;
mod types;

pub use config::*;
pub use coupon::{extract_coupon, unproxy_image_urls};
pub use draw::{latest_draw, parse_draws};
pub use error::{LotteryError, Result};
pub use format::*;
pub use mail::TicketEmail;
pub use matcher::{count_matches, evaluate, find_prize, is_winning_value};
pub use notify::{
    DrawReport, DrawSource, Mailbox, Notifier, Renderer, notify_coupon, notify_draw,
    notify_ticket,
};
pub use types::*;
