use lazy_token_core::{
    count, BudgetReport, CharRatioTokenCounter, Estimator, LazyTokenCounter, TokenBudget,
    TokenCounter, WhitespaceTokenCounter,
};
use pretty_assertions::assert_eq;

const SAMPLE: &str = "Estimating tokens, quickly and deterministically!\nNo codec needed.";

#[test]
fn lazy_counter_agrees_with_count() {
    assert_eq!(LazyTokenCounter.count(SAMPLE), count(SAMPLE));
    assert_eq!(Estimator::Lazy.count(SAMPLE), count(SAMPLE));
}

#[test]
fn estimators_differ_on_punctuated_text() {
    // Estimat ing tokens , quickly and determi nistica lly ! \n No codec needed .
    assert_eq!(LazyTokenCounter.count(SAMPLE), 15);
    assert_eq!(WhitespaceTokenCounter.count(SAMPLE), 8);
    assert_eq!(CharRatioTokenCounter.count(SAMPLE), SAMPLE.chars().count().div_ceil(4));
}

#[test]
fn estimators_are_usable_as_trait_objects() {
    let counters: Vec<Box<dyn TokenCounter>> = Estimator::ALL
        .into_iter()
        .map(|estimator| Box::new(estimator) as Box<dyn TokenCounter>)
        .collect();
    for counter in &counters {
        assert_eq!(counter.count(""), 0);
    }
}

#[test]
fn estimator_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Estimator::Whitespace).unwrap(), "\"whitespace\"");
    let parsed: Estimator = serde_json::from_str("\"chars\"").unwrap();
    assert_eq!(parsed, Estimator::Chars);
}

#[test]
fn budget_report_serializes_all_fields() {
    let report = TokenBudget::new(10).check_text(&LazyTokenCounter, SAMPLE);
    assert_eq!(
        report,
        BudgetReport {
            tokens: 15,
            limit: 10,
            remaining: 0,
            overflow: 5,
        }
    );
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"tokens": 15, "limit": 10, "remaining": 0, "overflow": 5})
    );
}
