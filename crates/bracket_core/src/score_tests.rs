use super::*;

// 4-slot, 2-round toy bracket: slots 0 and 2 win their openers, slot 0
// takes the final.
fn toy_truth() -> RoundTable {
    RoundTable::from_rows(&[
        vec![1.0, 1.0],
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 0.0],
    ])
    .unwrap()
}

const TOY_SCHEDULE: [f64; 2] = [10.0, 20.0];

#[test]
fn test_exact_picks_score_perfect() {
    let truth = toy_truth();
    let scores = per_round_score(&truth, &truth, &TOY_SCHEDULE).unwrap();
    assert_eq!(scores, vec![320.0, 320.0]);
    assert_eq!(total_score(&truth, &truth, &TOY_SCHEDULE).unwrap(), 640.0);
}

#[test]
fn test_fully_opposite_picks() {
    let truth = toy_truth();
    let picks = RoundTable::from_rows(&[
        vec![0.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 0.0],
        vec![1.0, 0.0],
    ])
    .unwrap();
    let scores = per_round_score(&picks, &truth, &TOY_SCHEDULE).unwrap();
    // Round 0: all 4 slots differ, 320 - 10*4/2 = 300.
    // Round 1: 2 slots differ, 320 - 20*2/2 = 300.
    assert_eq!(scores, vec![300.0, 300.0]);
}

#[test]
fn test_score_non_increasing_in_mismatches() {
    let truth = toy_truth();
    let mut picks = truth.clone();
    let mut last = per_round_score(&picks, &truth, &TOY_SCHEDULE).unwrap()[0];

    // Flip opening-round picks one slot at a time; each flip adds one
    // mismatch and the round score must never rise.
    for slot in 0..4 {
        let flipped = 1.0 - picks.get(slot, 0);
        picks.set(slot, 0, flipped);
        let score = per_round_score(&picks, &truth, &TOY_SCHEDULE).unwrap()[0];
        assert!(score <= last, "score rose after flipping slot {}", slot);
        last = score;
    }
}

#[test]
fn test_full_schedule_weighting() {
    // One mispicked championship costs 320; one mispicked opener costs 10.
    let mut truth = RoundTable::zeros(crate::NUM_SLOTS, crate::NUM_ROUNDS);
    for round in 0..crate::NUM_ROUNDS {
        truth.set(0, round, 1.0);
    }
    let mut picks = truth.clone();
    picks.set(0, 5, 0.0);
    picks.set(1, 5, 1.0);
    let scores = per_round_score(&picks, &truth, &crate::POINT_SCHEDULE).unwrap();
    assert_eq!(scores[5], 320.0 - 320.0 * 2.0 / 2.0);
    assert_eq!(scores[0], 320.0);
}

#[test]
fn test_point_schedule_doubles_from_ten() {
    assert_eq!(point_schedule(2), TOY_SCHEDULE.to_vec());
    assert_eq!(point_schedule(6), crate::POINT_SCHEDULE.to_vec());
    assert!(point_schedule(0).is_empty());
}

#[test]
fn test_shape_mismatch_rejected() {
    let truth = toy_truth();
    let picks = RoundTable::zeros(8, 3);
    assert!(per_round_score(&picks, &truth, &TOY_SCHEDULE).is_err());
    assert!(per_round_score(&truth, &truth, &[10.0]).is_err());
}
