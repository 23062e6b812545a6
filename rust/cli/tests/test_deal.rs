mod helpers;

use helpers::{line_value, run_cli};

#[test]
fn deal_is_deterministic_with_seed() {
    let a = run_cli(&["deal", "--seed", "1234"]);
    let b = run_cli(&["deal", "--seed", "1234"]);
    assert_eq!(a.code, 0);
    assert_eq!(a.stdout, b.stdout);
    assert_eq!(line_value(&a.stdout, "Seed: "), Some("1234"));
}

#[test]
fn deal_shows_both_hands_without_overlap() {
    let res = run_cli(&["deal", "--seed", "99"]);
    assert_eq!(res.code, 0);
    let player = line_value(&res.stdout, "Player: ").expect("player cards");
    let dealer = line_value(&res.stdout, "Dealer: ").expect("dealer cards");
    let player: Vec<&str> = player.split(", ").collect();
    let dealer: Vec<&str> = dealer.split(", ").collect();
    assert_eq!(player.len(), 3);
    assert_eq!(dealer.len(), 3);
    assert!(player.iter().all(|c| !dealer.contains(c)));
    assert!(line_value(&res.stdout, "If played: ").is_some());
}

#[test]
fn deal_without_seed_prints_generated_seed() {
    let res = run_cli(&["deal"]);
    assert_eq!(res.code, 0);
    let seed = line_value(&res.stdout, "Seed: ").expect("seed line");
    assert!(seed.parse::<u64>().is_ok());
}
