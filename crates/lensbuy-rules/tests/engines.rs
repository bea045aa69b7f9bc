//! Public-API tests for the two interpreters, exercised the way the ordering
//! flow calls them: once per product selection or quantity change.

use lensbuy_rules::{evaluate_promo, filter_diopters, master_options, DiopterRange, PromoRules};

#[test]
fn promo_evaluation_is_idempotent() {
    let text = "買3送1,5盒折100,10盒折250";
    for qty in 1..=12 {
        assert_eq!(evaluate_promo(text, qty), evaluate_promo(text, qty));
    }
}

#[test]
fn parsed_rules_match_one_shot_evaluation() {
    let text = "買2送1 買6送3 8盒折120";
    let rules = PromoRules::parse(text);
    for qty in 1..=12 {
        assert_eq!(rules.evaluate(qty), evaluate_promo(text, qty), "qty {qty}");
    }
}

#[test]
fn hint_remaining_units_track_quantity() {
    let text = "10盒折300";
    for qty in 1..10 {
        let result = evaluate_promo(text, qty);
        assert_eq!(result.hints.len(), 1);
        assert_eq!(
            result.hints[0].message,
            format!("再買 {} 盒折 300 元", 10 - qty)
        );
    }
    assert!(evaluate_promo(text, 10).hints.is_empty());
}

#[test]
fn filtered_options_are_always_a_master_subsequence() {
    let master = master_options();
    let samples = [
        "",
        "abc",
        "-1.00~-4.00",
        "-10~0",
        "-3.333, -2.5, 7",
        "-6.00~-6.50、-0.5",
        "-2.00~-1.00~bogus",
    ];

    for text in samples {
        let filtered = filter_diopters(text, &master);
        let mut cursor = master.iter();
        for value in &filtered {
            assert!(
                cursor.any(|m| m == value),
                "{value} out of order or absent for {text:?}"
            );
        }
    }
}

#[test]
fn full_span_offers_everything() {
    let master = master_options();
    assert_eq!(filter_diopters("-10.00~0.00", &master), master);
}

#[test]
fn parsed_range_agrees_with_filter() {
    let master = master_options();
    let text = "0.00、-0.50~-2.00";
    assert_eq!(
        DiopterRange::parse(text).apply(&master),
        filter_diopters(text, &master)
    );
}
