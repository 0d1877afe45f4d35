//! Tests for the calculation entity and factory.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().expect("valid timestamp")
}

#[fixture]
fn owner() -> UserId {
    UserId::new("11111111-1111-4111-8111-111111111111").expect("valid user id")
}

#[rstest]
#[case("addition", vec![10.0, 5.0, 3.5], 18.5)]
#[case("subtraction", vec![20.0, 5.0, 3.0], 12.0)]
#[case("multiplication", vec![2.0, 3.0, 4.0], 24.0)]
#[case("division", vec![100.0, 2.0, 5.0], 10.0)]
fn factory_builds_variants_that_evaluate(
    owner: UserId,
    #[case] tag: &str,
    #[case] inputs: Vec<f64>,
    #[case] expected: f64,
) {
    let calc = Calculation::create(tag, owner, inputs).expect("known tag");
    assert_eq!(calc.kind().as_str(), tag);
    assert_eq!(calc.get_result(), Ok(expected));
}

#[rstest]
fn factory_ignores_tag_case(owner: UserId) {
    let inputs = vec![1.0, 2.0, 3.0];
    let results: Vec<_> = ["addition", "Addition", "ADDITION"]
        .into_iter()
        .map(|tag| {
            let calc = Calculation::create(tag, owner, inputs.clone()).expect("known tag");
            assert_eq!(calc.kind(), CalculationKind::Addition);
            calc.get_result()
        })
        .collect();
    assert!(results.iter().all(|result| *result == Ok(6.0)));
}

#[rstest]
fn factory_rejects_unknown_tags(owner: UserId) {
    let err = Calculation::create("modulus", owner, vec![10.0, 3.0]).expect_err("unsupported");
    assert_eq!(err.to_string(), "Unsupported calculation type: modulus");
}

#[rstest]
fn factory_does_not_evaluate(owner: UserId) {
    let calc = Calculation::create("division", owner, vec![1.0, 0.0]).expect("known tag");
    assert_eq!(calc.result(), None);
    assert_eq!(
        calc.get_result(),
        Err(CalculationError::DivisionByZero { index: 1 })
    );
}

#[rstest]
#[case(vec![50.0, 0.0, 5.0])]
#[case(vec![100.0, 5.0, 0.0, 2.0])]
#[case(vec![50.0, 5.0, 0.0])]
fn division_by_zero_is_reported_wherever_it_occurs(owner: UserId, #[case] inputs: Vec<f64>) {
    let calc = Calculation::create("division", owner, inputs).expect("known tag");
    let err = calc.get_result().expect_err("zero divisor");
    assert!(matches!(err, CalculationError::DivisionByZero { .. }));
    assert_eq!(err.to_string(), "Cannot divide by zero.");
}

#[rstest]
fn short_inputs_fail_at_evaluation(owner: UserId) {
    let calc = Calculation::create("addition", owner, vec![10.0]).expect("known tag");
    let err = calc.get_result().expect_err("too few inputs");
    assert_eq!(err.code(), "invalid_input");
    assert_eq!(
        err.to_string(),
        "Inputs must be a list with at least two numbers."
    );
}

#[rstest]
fn overflow_is_rejected(owner: UserId) {
    let calc =
        Calculation::create("multiplication", owner, vec![f64::MAX, 10.0]).expect("known tag");
    assert_eq!(calc.get_result(), Err(CalculationError::NonFiniteResult));
}

#[rstest]
fn mixed_variants_dispatch_on_their_own_tag(owner: UserId) {
    let inputs = vec![10.0, 2.0];
    let results: Vec<_> = ["addition", "subtraction", "multiplication", "division"]
        .into_iter()
        .map(|tag| {
            Calculation::create(tag, owner, inputs.clone())
                .and_then(|calc| calc.get_result())
                .expect("valid calculation")
        })
        .collect();
    assert_eq!(results, vec![12.0, 8.0, 20.0, 5.0]);
}

#[rstest]
fn compute_result_stores_value(owner: UserId) {
    let mut calc = Calculation::new(CalculationKind::Subtraction, owner, vec![3.0, 5.0, 20.0], at(5));
    assert_eq!(calc.compute_result(), Ok(-22.0));
    assert_eq!(calc.result(), Some(-22.0));
    assert_eq!(calc.inputs(), &[3.0, 5.0, 20.0]);
}

#[rstest]
fn replace_inputs_reevaluates_and_bumps_timestamp(owner: UserId) {
    let mut calc = Calculation::new(CalculationKind::Addition, owner, vec![1.0, 2.0], at(5));
    calc.compute_result().expect("evaluates");

    assert_eq!(calc.replace_inputs(vec![4.0, 5.0, 6.0], at(9)), Ok(15.0));
    assert_eq!(calc.result(), Some(15.0));
    assert_eq!(calc.created_at(), at(5));
    assert_eq!(calc.updated_at(), at(9));
}

#[rstest]
fn failed_replacement_leaves_entity_untouched(owner: UserId) {
    let mut calc = Calculation::new(CalculationKind::Division, owner, vec![8.0, 2.0], at(5));
    calc.compute_result().expect("evaluates");
    let before = calc.clone();

    let err = calc
        .replace_inputs(vec![8.0, 0.0], at(9))
        .expect_err("zero divisor");
    assert_eq!(err, CalculationError::DivisionByZero { index: 1 });
    assert_eq!(calc, before);
}

#[rstest]
fn calculation_id_parses_uuid_text() {
    let id: CalculationId = "3fa85f64-5717-4562-b3fc-2c963f66afa6"
        .parse()
        .expect("valid uuid");
    assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    assert!("nope".parse::<CalculationId>().is_err());
}
