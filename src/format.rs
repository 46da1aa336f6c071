//! Chat message rendering.
//!
//! Output stays within the messenger's lightweight markup: `*bold*` only.
//! Values that come from outside (feed dates, scraped fields) are escaped
//! so a stray `_` or `*` cannot open an unterminated entity.

use crate::matcher::is_winning_value;
use crate::types::{DrawResult, MatchResult, PlayerCombination, Prize, TicketRecord};

/// Shown in place of any ticket field that could not be extracted
pub const PLACEHOLDER: &str = "N/A";

const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━━━";

/// Render the draw check notification.
///
/// Sections, in order: winning combination, player combination (matched
/// values in brackets), match counts, prize or consolation, jackpot banner,
/// jackpot-winner note, footer link.
#[must_use]
pub fn format_draw_message(
    draw: &DrawResult,
    chosen: &PlayerCombination,
    result: MatchResult,
    prize: Prize,
    results_link: &str,
) -> String {
    let mut lines = vec![
        format!("🎰 *Euromillions Result - {}*", escape_markdown(&draw.date)),
        String::new(),
        "🏆 *Winning combination:*".to_string(),
        format!("   Numbers: {}", join_escaped(&draw.numbers)),
        format!("   Stars: {}", join_escaped(&draw.stars)),
        String::new(),
        "🎫 *Your combination:*".to_string(),
        format!("   Numbers: {}", mark_matches(chosen.numbers(), &draw.numbers)),
        format!("   Stars: {}", mark_matches(chosen.stars(), &draw.stars)),
        String::new(),
        "📊 *Results:*".to_string(),
        format!("   Matched numbers: {}/5", result.matched_numbers),
        format!("   Matched stars: {}/2", result.matched_stars),
    ];

    if prize.is_win() {
        lines.extend([
            String::new(),
            "💰 *YOU WON!*".to_string(),
            format!("   Prize: {}", format_euros(prize.amount)),
            format!("   Winners in this category: {}", prize.winners),
        ]);
    } else {
        lines.extend([
            String::new(),
            "😢 No prize this time loosers, you are still poor".to_string(),
        ]);
    }

    if result.is_jackpot() {
        lines.extend([
            String::new(),
            "🎉🎉🎉 *JACKPOT!!! YOU ARE A MILLIONAIRE!!!* 🎉🎉🎉".to_string(),
        ]);
    }

    if draw.jackpot_winner {
        lines.extend([
            String::new(),
            "ℹ️ This draw had a jackpot winner!".to_string(),
        ]);
    }

    lines.push(format!("official results: {results_link}"));
    lines.join("\n")
}

/// Render the ticket confirmation notification
#[must_use]
pub fn format_ticket_message(ticket: &TicketRecord) -> String {
    let draw_label = if ticket.is_multi_draw() {
        "Sorteos"
    } else {
        "Sorteo"
    };

    let lines = [
        "🎫 *EUROMILLONES - Resguardo*".to_string(),
        SEPARATOR.to_string(),
        String::new(),
        "📍 *Tu combinación:*".to_string(),
        format!("   Números: {}", join_or_placeholder(&ticket.numbers)),
        format!("   Estrellas: {}", join_or_placeholder(&ticket.stars)),
        String::new(),
        SEPARATOR.to_string(),
        String::new(),
        "🎰 *EL MILLÓN*".to_string(),
        format!("   Código: {}", or_placeholder(ticket.millon_code.as_deref())),
        format!("   Fecha: {}", or_placeholder(ticket.millon_date.as_deref())),
        String::new(),
        SEPARATOR.to_string(),
        String::new(),
        format!(
            "📅 {draw_label}: {}",
            or_placeholder(ticket.draw_date.as_deref())
        ),
        format!("💶 Importe: {}", or_placeholder(ticket.price.as_deref())),
        format!("🎟️ Apuestas: {}", escape_markdown(&ticket.bet_count)),
        String::new(),
        SEPARATOR.to_string(),
        String::new(),
        format!(
            "💰 *Saldo disponible:* {}",
            or_placeholder(ticket.balance.as_deref())
        ),
        String::new(),
        format!("🔖 Ref: {}", or_placeholder(ticket.reference.as_deref())),
    ];

    lines.join("\n")
}

/// Short caption sent along with the rendered coupon image
#[must_use]
pub fn format_coupon_caption(ticket: &TicketRecord) -> String {
    let draw_label = if ticket.is_multi_draw() {
        "Sorteos"
    } else {
        "Sorteo"
    };

    [
        "🎫 *EUROMILLONES - Resguardo*".to_string(),
        format!(
            "📅 {draw_label}: {}",
            or_placeholder(ticket.draw_date.as_deref())
        ),
        format!("🔖 Ref: {}", or_placeholder(ticket.reference.as_deref())),
    ]
    .join("\n")
}

/// Format euros with thousands grouping and two decimals, e.g. `€1,234.50`
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_euros(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}€{grouped}.{:02}", cents % 100)
}

/// Backslash-escape the markup characters `_`, `*` and `` ` ``
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '_' | '*' | '`') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn mark_matches(chosen: &[String], winning: &[String]) -> String {
    chosen
        .iter()
        .map(|value| {
            let shown = escape_markdown(value);
            if is_winning_value(value, winning) {
                format!("[{shown}]")
            } else {
                shown
            }
        })
        .collect::<Vec<_>>()
        .join(" - ")
}

fn join_escaped(values: &[String]) -> String {
    values
        .iter()
        .map(|v| escape_markdown(v))
        .collect::<Vec<_>>()
        .join(" - ")
}

fn join_or_placeholder(values: &[String]) -> String {
    if values.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        join_escaped(values)
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), escape_markdown)
}
