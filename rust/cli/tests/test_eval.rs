mod helpers;

use helpers::{line_value, run_cli};

#[test]
fn eval_classifies_royal_flush() {
    let res = run_cli(&["eval", "As", "Ks", "Qs"]);
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert_eq!(line_value(&res.stdout, "Category: "), Some("Royal Flush"));
    assert_eq!(line_value(&res.stdout, "Key: "), Some("A, K, Q"));
}

#[test]
fn eval_accepts_comma_separated_tokens() {
    let res = run_cli(&["eval", "As,Ks,Qh"]);
    assert_eq!(res.code, 0);
    assert_eq!(line_value(&res.stdout, "Category: "), Some("Straight"));
}

#[test]
fn eval_pair_reports_pair_and_kicker() {
    let res = run_cli(&["eval", "9h", "9c", "2d"]);
    assert_eq!(res.code, 0);
    assert_eq!(line_value(&res.stdout, "Category: "), Some("One Pair"));
    assert_eq!(line_value(&res.stdout, "Key: "), Some("9, 2"));
}

#[test]
fn eval_jack_high_does_not_qualify() {
    let res = run_cli(&["eval", "Jh", "8c", "3d"]);
    assert_eq!(res.code, 0);
    assert_eq!(line_value(&res.stdout, "Category: "), Some("High Card"));
    assert_eq!(line_value(&res.stdout, "Dealer qualifies: "), Some("no"));
}

#[test]
fn eval_rejects_duplicates_and_bad_tokens() {
    let dup = run_cli(&["eval", "As", "As", "Kd"]);
    assert_eq!(dup.code, 2);
    assert!(dup.stderr.contains("Invalid hand"));

    let bad = run_cli(&["eval", "As", "1z", "Kd"]);
    assert_eq!(bad.code, 2);
    assert!(bad.stderr.contains("Invalid input"));

    let four = run_cli(&["eval", "As", "Kd", "Qh", "Jc"]);
    assert_eq!(four.code, 2);
}
