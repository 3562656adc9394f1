use dice_regression::{named_outcomes, sample_rounds, DEFAULT_SEED};

#[test]
fn named_outcomes_are_pinned() {
    let outcomes = named_outcomes();
    insta::assert_json_snapshot!("named_outcomes", outcomes);
}

#[test]
fn seeded_rounds_are_reproducible() {
    let baseline = sample_rounds(DEFAULT_SEED, 10, 20).unwrap();
    let repeat = sample_rounds(DEFAULT_SEED, 10, 20).unwrap();
    assert_eq!(baseline, repeat, "same seed should match");

    let different = sample_rounds(7, 10, 20).unwrap();
    assert_ne!(baseline["rounds"], different["rounds"], "different seeds should diverge");
}

#[test]
fn seeded_rounds_resolve_consistently() {
    let trace = sample_rounds(DEFAULT_SEED, 8, 50).unwrap();
    for round in trace["rounds"].as_array().unwrap() {
        let die1 = round["die1"].as_u64().unwrap() as u32;
        let die2 = round["die2"].as_u64().unwrap() as u32;
        assert!((1..=8).contains(&die1) && (1..=8).contains(&die2));
        let (combo, win) = dice_core::resolve(die1, die2);
        assert_eq!(combo, round["combo"]);
        assert_eq!(win, round["win"]);
    }
}
