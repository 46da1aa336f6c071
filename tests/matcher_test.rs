use lottery_notify::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn draw(numbers: &[&str], stars: &[&str], prizes: Vec<PrizeTier>) -> DrawResult {
    DrawResult {
        date: "2026-01-23".into(),
        numbers: strings(numbers),
        stars: strings(stars),
        prizes,
        jackpot_winner: false,
    }
}

fn tier(matched_numbers: u8, matched_stars: u8, amount: f64, winners: u64) -> PrizeTier {
    PrizeTier {
        matched_numbers,
        matched_stars,
        amount,
        winners,
    }
}

#[test]
fn test_evaluate_partial_match() {
    let chosen = PlayerCombination::parse("03,07,12,19,41", "02,09").unwrap();
    let draw = draw(&["07", "12", "19", "20", "41"], &["02", "11"], Vec::new());

    let result = evaluate(&chosen, &draw);
    assert_eq!(result.matched_numbers, 4);
    assert_eq!(result.matched_stars, 1);
    assert!(!result.is_jackpot());
}

#[test]
fn test_evaluate_jackpot() {
    let chosen = PlayerCombination::parse("1,2,3,4,5", "6,7").unwrap();
    let draw = draw(&["05", "04", "03", "02", "01"], &["07", "06"], Vec::new());

    let result = evaluate(&chosen, &draw);
    assert!(result.is_jackpot());
    assert_eq!(result.to_string(), "5+2");
}

#[test]
fn test_evaluate_ignores_zero_padding() {
    let chosen = PlayerCombination::parse("7,12,19,20,41", "2,11").unwrap();
    let draw = draw(&["7", "12", "19", "20", "41"], &["2", "11"], Vec::new());

    assert!(evaluate(&chosen, &draw).is_jackpot());
}

#[test]
fn test_stars_not_compared_with_numbers() {
    let chosen = PlayerCombination::parse("01,02,03,04,05", "07,12").unwrap();
    let draw = draw(&["07", "12", "30", "40", "50"], &["01", "02"], Vec::new());

    let result = evaluate(&chosen, &draw);
    assert_eq!(result.matched_numbers, 0);
    assert_eq!(result.matched_stars, 0);
}

#[test]
fn test_count_matches_set_semantics() {
    let chosen = strings(&["07", "07", "07", "12", "12"]);
    let winning = strings(&["07", "12", "19", "20", "41"]);
    assert_eq!(count_matches(&chosen, &winning), 2);

    let winning_dupes = strings(&["07", "07", "07", "07", "07"]);
    assert_eq!(count_matches(&chosen, &winning_dupes), 1);
}

#[test]
fn test_count_matches_empty() {
    assert_eq!(count_matches(&[], &strings(&["01", "02"])), 0);
    assert_eq!(count_matches(&strings(&["01"]), &[]), 0);
    assert_eq!(count_matches(&[], &[]), 0);
}

#[test]
fn test_match_counts_bounded() {
    let winning = draw(&["01", "02", "03", "04", "05"], &["01", "02"], Vec::new());
    for offset in 0..10u8 {
        let numbers: Vec<String> = (1..=5).map(|n| format!("{:02}", n + offset)).collect();
        let stars: Vec<String> = (1..=2).map(|n| format!("{:02}", n + offset)).collect();
        let chosen = PlayerCombination::new(numbers, stars).unwrap();

        let result = evaluate(&chosen, &winning);
        assert!(result.matched_numbers <= 5);
        assert!(result.matched_stars <= 2);
    }
}

#[test]
fn test_is_winning_value() {
    let winning = strings(&["07", "12"]);
    assert!(is_winning_value("07", &winning));
    assert!(is_winning_value("7", &winning));
    assert!(!is_winning_value("17", &winning));
}

#[test]
fn test_find_prize_hit() {
    let tiers = vec![tier(5, 2, 0.0, 0), tier(4, 1, 39.3, 1234), tier(2, 0, 4.1, 900_000)];
    let prize = find_prize(
        &tiers,
        MatchResult {
            matched_numbers: 4,
            matched_stars: 1,
        },
    );

    assert!((prize.amount - 39.3).abs() < f64::EPSILON);
    assert_eq!(prize.winners, 1234);
    assert!(prize.is_win());
}

#[test]
fn test_find_prize_first_in_table_order() {
    let tiers = vec![tier(3, 1, 10.0, 5), tier(3, 1, 99.0, 1)];
    let prize = find_prize(
        &tiers,
        MatchResult {
            matched_numbers: 3,
            matched_stars: 1,
        },
    );

    assert!((prize.amount - 10.0).abs() < f64::EPSILON);
    assert_eq!(prize.winners, 5);
}

#[test]
fn test_find_prize_absent_tier_is_zero() {
    let tiers = vec![tier(5, 2, 0.0, 0), tier(4, 1, 39.3, 1234)];

    for (numbers, stars) in [(0, 0), (1, 0), (1, 1), (3, 2), (4, 0)] {
        let prize = find_prize(
            &tiers,
            MatchResult {
                matched_numbers: numbers,
                matched_stars: stars,
            },
        );
        assert_eq!(prize, Prize::default());
        assert!(!prize.is_win());
    }

    assert_eq!(find_prize(&[], MatchResult::default()), Prize::default());
}
