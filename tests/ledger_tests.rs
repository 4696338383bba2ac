use answer_raffle_bot::game::error::GameError;
use answer_raffle_bot::game::ledger::Ledger;

const U1: u64 = 1001;
const U2: u64 = 1002;

#[test]
fn test_sequence_numbers_are_dense_from_one() {
    let mut ledger = Ledger::new();

    for expected in 1..=20u32 {
        let answer = ledger.record(u64::from(expected % 3 + 1), None).unwrap();
        assert_eq!(answer.number, expected);
    }

    let numbers: Vec<u32> = ledger.answers().iter().map(|a| a.number).collect();
    assert_eq!(numbers, (1..=20).collect::<Vec<u32>>());
}

#[test]
fn test_remove_then_record_reuses_the_top_number() {
    let mut ledger = Ledger::new();
    ledger.record(U1, None).unwrap();
    ledger.record(U2, None).unwrap();
    ledger.record(U1, None).unwrap();

    ledger.remove(2).unwrap();
    assert_eq!(ledger.answer_count(), 2);

    let answer = ledger.record(U2, None).unwrap();
    assert_eq!(answer.number, 3);
}

#[test]
fn test_remove_decrements_higher_numbers_everywhere() {
    let mut ledger = Ledger::new();
    for i in 0..5 {
        ledger.record(if i % 2 == 0 { U1 } else { U2 }, None).unwrap();
    }
    // U1 holds #1 #3 #5, U2 holds #2 #4.
    let u2_tickets_before = ledger
        .roll_pool()
        .iter()
        .filter(|&&t| ledger.owner_of(t) == Some(U2))
        .count();

    ledger.remove(3).unwrap();

    let numbers: Vec<u32> = ledger.answers().iter().map(|a| a.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert_eq!(ledger.roll_pool(), &[1, 2, 3, 4]);

    // U2 was not the removed owner; their ticket count is unchanged.
    let u2_tickets_after = ledger
        .roll_pool()
        .iter()
        .filter(|&&t| ledger.owner_of(t) == Some(U2))
        .count();
    assert_eq!(u2_tickets_before, u2_tickets_after);
}

#[test]
fn test_remove_unknown_number_is_not_found_and_harmless() {
    let mut ledger = Ledger::new();
    ledger.record(U1, Some("only".into())).unwrap();
    let before = ledger.clone();

    assert_eq!(ledger.remove(2), Err(GameError::AnswerNotFound(2)));
    assert_eq!(ledger, before);
}

#[test]
fn test_clear_then_record_starts_over_at_one() {
    let mut ledger = Ledger::new();
    ledger.record(U1, None).unwrap();
    ledger.record(U2, None).unwrap();

    ledger.clear();
    assert!(ledger.leaderboard().is_empty());
    assert!(ledger.roll_pool().is_empty());

    let answer = ledger.record(U1, None).unwrap();
    assert_eq!(answer.number, 1);
}

#[test]
fn test_capacity_cap_rejects_the_overflowing_answer() {
    let mut ledger = Ledger::with_capacity(Some(100));
    for _ in 0..100 {
        ledger.record(U1, None).unwrap();
    }
    assert_eq!(
        ledger.record(U2, None),
        Err(GameError::CapacityExceeded(100))
    );
    assert_eq!(ledger.answer_count(), 100);
}

#[test]
fn test_excluded_owner_leaves_leaderboard_but_not_history() {
    let mut ledger = Ledger::new();
    ledger.record(U1, None).unwrap();
    ledger.record(U2, None).unwrap();
    ledger.record(U1, None).unwrap();

    ledger.exclude_owner(U1).unwrap();

    // The draw pool only holds U2's ticket now.
    assert_eq!(ledger.roll_pool(), &[2]);
    // The leaderboard no longer lists U1.
    let board = ledger.leaderboard();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].owner, U2);
    // The historical answer rows stay, un-renumbered.
    assert_eq!(ledger.answer_count(), 3);
}

// The end-to-end scenario: U1 answers twice around U2, then answer #1 goes.
#[test]
fn test_record_rank_remove_scenario() {
    let mut ledger = Ledger::new();
    assert_eq!(ledger.record(U1, None).unwrap().number, 1);
    assert_eq!(ledger.record(U2, None).unwrap().number, 2);
    assert_eq!(ledger.record(U1, None).unwrap().number, 3);

    let board = ledger.leaderboard();
    assert_eq!(board[0].owner, U1);
    assert_eq!(board[0].count, 2);
    assert_eq!(board[1].owner, U2);
    assert_eq!(board[1].count, 1);

    ledger.remove(1).unwrap();

    assert_eq!(ledger.count_for(U1), 1);
    assert_eq!(ledger.count_for(U2), 1);
    assert_eq!(ledger.roll_pool(), &[1, 2]);
    assert_eq!(ledger.owner_of(1), Some(U2));
    assert_eq!(ledger.owner_of(2), Some(U1));
}
