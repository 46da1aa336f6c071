//! Single-shot notification runs.
//!
//! Network, mailbox and rendering access stay outside the crate behind the
//! collaborator traits below; each run fetches once, transforms, and hands
//! the result to a [`Notifier`]. Collaborator errors propagate unchanged.

use crate::config::Config;
use crate::coupon::extract_coupon;
use crate::draw::{latest_draw, parse_draws};
use crate::error::Result;
use crate::format::{format_coupon_caption, format_draw_message, format_ticket_message};
use crate::mail::TicketEmail;
use crate::matcher::{evaluate, find_prize};
use crate::types::{CouponDocument, DrawResult, MatchResult, PlayerCombination, Prize, TicketRecord};
use tracing::{info, warn};

/// Fetches the raw draw feed body
pub trait DrawSource {
    fn fetch_draws(&self, url: &str) -> Result<String>;
}

/// Fetches the most recent email from a sender as raw RFC 822 bytes
pub trait Mailbox {
    fn latest_from(&self, sender: &str) -> Result<Vec<u8>>;
}

/// Turns an HTML document into an image
pub trait Renderer {
    fn render(&self, document: &CouponDocument, width: u32, height: u32) -> Result<Vec<u8>>;
}

/// Delivers messages to the user
pub trait Notifier {
    fn send_text(&self, text: &str) -> Result<()>;
    fn send_photo(&self, image: &[u8], caption: &str) -> Result<()>;
}

/// Everything a draw check produced
#[derive(Debug, Clone, PartialEq)]
pub struct DrawReport {
    pub draw: DrawResult,
    pub result: MatchResult,
    pub prize: Prize,
    pub message: String,
}

/// Check the latest draw against a combination and send the result
pub fn notify_draw(
    config: &Config,
    chosen: &PlayerCombination,
    source: &impl DrawSource,
    notifier: &impl Notifier,
) -> Result<DrawReport> {
    info!("Checking Euromillions results");
    let body = source.fetch_draws(&config.draws_api_url)?;
    let draw = latest_draw(parse_draws(&body)?)?;
    info!(
        "Latest draw {}: {:?} + {:?}",
        draw.date, draw.numbers, draw.stars
    );

    let result = evaluate(chosen, &draw);
    let prize = find_prize(&draw.prizes, result);
    info!(
        "Matched {result}, prize {:.2} ({} winners)",
        prize.amount, prize.winners
    );

    let message = format_draw_message(&draw, chosen, result, prize, &config.results_link);
    notifier.send_text(&message)?;
    info!("Draw message sent");

    Ok(DrawReport {
        draw,
        result,
        prize,
        message,
    })
}

/// Scrape the latest confirmation email and send its ticket details
pub fn notify_ticket(
    config: &Config,
    mailbox: &impl Mailbox,
    notifier: &impl Notifier,
) -> Result<TicketRecord> {
    let email = fetch_email(config, mailbox)?;
    let ticket = TicketRecord::extract(&email.html);
    info!(
        "Ticket: {:?} + {:?}, draw {:?}, ref {:?}",
        ticket.numbers, ticket.stars, ticket.draw_date, ticket.reference
    );

    notifier.send_text(&format_ticket_message(&ticket))?;
    info!("Ticket message sent");
    Ok(ticket)
}

/// Render the coupon of the latest confirmation email and send it as a photo
pub fn notify_coupon(
    config: &Config,
    mailbox: &impl Mailbox,
    renderer: &impl Renderer,
    notifier: &impl Notifier,
) -> Result<TicketRecord> {
    let email = fetch_email(config, mailbox)?;
    let document = extract_coupon(&email.html, config)?;
    let ticket = TicketRecord::extract(&email.html);

    let image = renderer.render(&document, config.viewport_width, config.viewport_height)?;
    info!("Coupon rendered: {} bytes", image.len());

    notifier.send_photo(&image, &format_coupon_caption(&ticket))?;
    info!("Coupon image sent");
    Ok(ticket)
}

fn fetch_email(config: &Config, mailbox: &impl Mailbox) -> Result<TicketEmail> {
    info!("Fetching latest email from {}", config.sender_address);
    let raw = mailbox.latest_from(&config.sender_address)?;
    let email = TicketEmail::parse(&raw)?;

    if !email.is_from(&config.sender_address) {
        warn!(
            "Email sender {:?} differs from {}",
            email.from, config.sender_address
        );
    }

    Ok(email)
}
