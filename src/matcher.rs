//! Comparing a player's combination against a draw

use crate::types::{DrawResult, MatchResult, PlayerCombination, Prize, PrizeTier};
use std::collections::HashSet;

/// Count matched numbers and stars, each value counted once
#[must_use]
pub fn evaluate(chosen: &PlayerCombination, draw: &DrawResult) -> MatchResult {
    MatchResult {
        matched_numbers: count_matches(chosen.numbers(), &draw.numbers),
        matched_stars: count_matches(chosen.stars(), &draw.stars),
    }
}

/// Size of the intersection of two value lists under set semantics
#[must_use]
pub fn count_matches(chosen: &[String], winning: &[String]) -> u8 {
    let chosen: HashSet<String> = chosen.iter().map(|v| value_key(v)).collect();
    let winning: HashSet<String> = winning.iter().map(|v| value_key(v)).collect();

    u8::try_from(chosen.intersection(&winning).count()).unwrap_or(u8::MAX)
}

/// Whether `value` is one of `winning`, ignoring zero padding
#[must_use]
pub fn is_winning_value(value: &str, winning: &[String]) -> bool {
    let key = value_key(value);
    winning.iter().any(|w| value_key(w) == key)
}

/// Look up the prize for a match. First tier in table order wins; no tier
/// means no prize.
#[must_use]
pub fn find_prize(tiers: &[PrizeTier], result: MatchResult) -> Prize {
    tiers
        .iter()
        .find(|t| {
            t.matched_numbers == result.matched_numbers && t.matched_stars == result.matched_stars
        })
        .map_or_else(Prize::default, |t| Prize {
            amount: t.amount,
            winners: t.winners,
        })
}

// "7" and "07" are the same ball
fn value_key(value: &str) -> String {
    let value = value.trim();
    value
        .parse::<u32>()
        .map_or_else(|_| value.to_string(), |n| n.to_string())
}
