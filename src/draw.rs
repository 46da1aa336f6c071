//! Decoding the draw results feed

use crate::error::{LotteryError, Result};
use crate::types::DrawResult;
use std::cmp::Ordering;

/// Decode the feed's JSON array of draws
pub fn parse_draws(json: &str) -> Result<Vec<DrawResult>> {
    Ok(serde_json::from_str(json)?)
}

/// Most recent draw by date
pub fn latest_draw(draws: Vec<DrawResult>) -> Result<DrawResult> {
    draws
        .into_iter()
        .max_by(compare_dates)
        .ok_or(LotteryError::NoDraws)
}

fn compare_dates(a: &DrawResult, b: &DrawResult) -> Ordering {
    match (a.parsed_date(), b.parsed_date()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.date.cmp(&b.date),
    }
}
