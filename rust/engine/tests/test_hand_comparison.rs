/// Property-based tests for the hand ordering
use anteplay_engine::cards::{full_deck, Card};
use anteplay_engine::hand::{classify, compare_hands, ClassifiedHand, Hand};
use proptest::prelude::*;
use std::cmp::Ordering;

// Strategy to generate a hand of three distinct cards from the 52-card set
fn hand_strategy() -> impl Strategy<Value = ClassifiedHand> {
    prop::sample::subsequence(full_deck(), 3).prop_map(|cards: Vec<Card>| {
        let hand = Hand::from_slice(&cards).expect("subsequence yields distinct cards");
        classify(&hand)
    })
}

proptest! {
    #[test]
    fn comparison_is_reflexive(a in hand_strategy()) {
        prop_assert_eq!(compare_hands(&a, &a), Ordering::Equal);
    }

    #[test]
    fn comparison_is_antisymmetric(a in hand_strategy(), b in hand_strategy()) {
        prop_assert_eq!(compare_hands(&a, &b), compare_hands(&b, &a).reverse());
    }

    #[test]
    fn comparison_is_transitive(a in hand_strategy(), b in hand_strategy(), c in hand_strategy()) {
        let ab = compare_hands(&a, &b);
        let bc = compare_hands(&b, &c);
        if ab != Ordering::Greater && bc != Ordering::Greater {
            prop_assert!(compare_hands(&a, &c) != Ordering::Greater);
        }
        if ab == Ordering::Equal && bc == Ordering::Equal {
            prop_assert_eq!(compare_hands(&a, &c), Ordering::Equal);
        }
    }

    #[test]
    fn higher_category_always_wins(a in hand_strategy(), b in hand_strategy()) {
        if a.category > b.category {
            prop_assert_eq!(compare_hands(&a, &b), Ordering::Greater);
        }
    }

    #[test]
    fn equal_only_when_category_and_key_match(a in hand_strategy(), b in hand_strategy()) {
        let equal = compare_hands(&a, &b) == Ordering::Equal;
        prop_assert_eq!(equal, a.category == b.category && a.key() == b.key());
    }

    #[test]
    fn ord_impl_agrees_with_compare_hands(a in hand_strategy(), b in hand_strategy()) {
        prop_assert_eq!(a.cmp(&b), compare_hands(&a, &b));
    }
}
