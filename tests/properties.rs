//! Property tests for card ordering and stack invariants.

use proptest::prelude::*;

use cardstack::ranks::{BIG2_RANKS, CRIBBAGE_RANKS, POKER_RANKS};
use cardstack::tools::compare_stacks;
use cardstack::{Card, DEFAULT_RANKS, End, RankTable, Stack, Suit, Value};

fn any_card() -> impl Strategy<Value = Card> {
    (0..Value::COUNT, 0..Suit::COUNT)
        .prop_map(|(value, suit)| Card::new(Value::ALL[value], Suit::ALL[suit]))
}

fn any_ranks() -> impl Strategy<Value = RankTable> {
    prop_oneof![
        Just(DEFAULT_RANKS),
        Just(POKER_RANKS),
        Just(BIG2_RANKS),
        Just(CRIBBAGE_RANKS),
    ]
}

fn any_end() -> impl Strategy<Value = End> {
    prop_oneof![Just(End::Top), Just(End::Bottom)]
}

proptest! {
    /// Exactly one of `a == b`, `a > b`, `b > a` holds under any table.
    #[test]
    fn comparison_trichotomy(a in any_card(), b in any_card(), ranks in any_ranks()) {
        let eq = a.eq(&b, Some(&ranks));
        let a_gt = a.gt(&b, Some(&ranks));
        let b_gt = b.gt(&a, Some(&ranks));

        prop_assert!(!(a_gt && b_gt));
        prop_assert_eq!(u8::from(eq) + u8::from(a_gt) + u8::from(b_gt), 1);
        prop_assert_eq!(a.ge(&b, Some(&ranks)), eq || a_gt);
        prop_assert_eq!(a.lt(&b, Some(&ranks)), b_gt);
    }

    /// Card equality agrees with the default ordering.
    #[test]
    fn ord_matches_equality(a in any_card(), b in any_card()) {
        prop_assert_eq!(a == b, a.cmp(&b) == core::cmp::Ordering::Equal);
    }

    /// Sorting is idempotent and leaves the stack sorted.
    #[test]
    fn sort_is_idempotent(cards in prop::collection::vec(any_card(), 0..60), ranks in any_ranks()) {
        let mut stack = Stack::from_cards(cards.clone());
        stack.sort(Some(&ranks));
        prop_assert!(stack.is_sorted(Some(&ranks)));

        let once = stack.clone();
        stack.sort(Some(&ranks));
        prop_assert_eq!(&stack, &once);
        prop_assert!(compare_stacks(&stack.slice(..), &cards));
    }

    /// Re-adding dealt cards to the end they came from restores the stack.
    #[test]
    fn deal_then_add_round_trip(
        cards in prop::collection::vec(any_card(), 0..60),
        num in 0usize..70,
        end in any_end(),
    ) {
        let mut stack = Stack::from_cards(cards.clone());
        let dealt = stack.deal(num, end);
        prop_assert_eq!(dealt.len(), num.min(cards.len()));

        stack.add(dealt, end);
        prop_assert_eq!(stack, cards);
    }

    /// Splitting never loses or reorders cards.
    #[test]
    fn split_preserves_cards(
        cards in prop::collection::vec(any_card(), 0..60),
        at in prop::option::of(0usize..70),
    ) {
        let (bottom, top) = Stack::from_cards(cards.clone()).split(at);
        prop_assert_eq!(bottom + top, cards);
    }
}
