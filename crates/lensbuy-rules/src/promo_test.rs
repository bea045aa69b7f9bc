use super::*;

// -----------------------------------------------------------------------
// PromoRules::parse
// -----------------------------------------------------------------------

#[test]
fn parse_finds_both_clause_families() {
    let rules = PromoRules::parse("買3送1,5盒折100");
    assert_eq!(rules.gift_rules, vec![GiftRule { buy: 3, free: 1 }]);
    assert_eq!(
        rules.discount_tiers,
        vec![DiscountTier {
            threshold: 5,
            amount: 100
        }]
    );
}

#[test]
fn parse_collects_every_occurrence_in_order() {
    let rules = PromoRules::parse("3盒折50、6盒折120、10盒折250");
    let thresholds: Vec<u32> = rules.discount_tiers.iter().map(|t| t.threshold).collect();
    assert_eq!(thresholds, vec![3, 6, 10]);
}

#[test]
fn parse_skips_zero_buy_threshold() {
    let rules = PromoRules::parse("0送1 3送1");
    assert_eq!(rules.gift_rules, vec![GiftRule { buy: 3, free: 1 }]);
}

#[test]
fn parse_skips_overflowing_numbers() {
    let rules = PromoRules::parse("99999999999送1, 2盒折99999999999");
    assert!(rules.is_empty());
}

#[test]
fn parse_ignores_unrelated_text() {
    assert!(PromoRules::parse("全館免運 買就送").is_empty());
}

#[test]
fn parse_ignores_fullwidth_digits() {
    assert!(PromoRules::parse("買３送１").is_empty());
}

// -----------------------------------------------------------------------
// earned gifts
// -----------------------------------------------------------------------

#[test]
fn gifts_zero_below_threshold() {
    for qty in 0..3 {
        assert_eq!(evaluate("3送1", qty).earned_gift_count, 0, "qty {qty}");
    }
}

#[test]
fn gifts_scale_with_whole_batches() {
    for qty in 3..40 {
        assert_eq!(evaluate("3送1", qty).earned_gift_count, qty / 3, "qty {qty}");
    }
}

#[test]
fn gifts_multiply_free_count() {
    assert_eq!(evaluate("買5送2", 11).earned_gift_count, 4);
}

#[test]
fn gifts_last_reachable_clause_wins() {
    // Both clauses reachable at 6: the later one overwrites the earlier.
    assert_eq!(evaluate("2送1 3送1", 6).earned_gift_count, 2);
    assert_eq!(evaluate("3送1 2送1", 6).earned_gift_count, 3);
}

#[test]
fn gifts_unreachable_later_clause_keeps_earlier_total() {
    assert_eq!(evaluate("2送1 10送5", 6).earned_gift_count, 3);
}

#[test]
fn gifts_saturate_instead_of_overflowing() {
    assert_eq!(evaluate("1送4294967295", 2).earned_gift_count, u32::MAX);
}

// -----------------------------------------------------------------------
// hints
// -----------------------------------------------------------------------

#[test]
fn hints_emitted_for_unreached_tiers_only() {
    let result = evaluate("3盒折50、6盒折120、10盒折250", 4);
    let thresholds: Vec<u32> = result.hints.iter().map(|h| h.next_threshold).collect();
    assert_eq!(thresholds, vec![6, 10]);
    assert_eq!(result.hints[0].savings, 120);
    assert_eq!(result.hints[0].message, "再買 2 盒折 120 元");
    assert_eq!(result.hints[1].message, "再買 6 盒折 250 元");
}

#[test]
fn hints_empty_once_threshold_met() {
    assert!(evaluate("5盒折100", 5).hints.is_empty());
    assert!(evaluate("5盒折100", 9).hints.is_empty());
}

#[test]
fn hints_keep_source_order_even_when_unsorted() {
    let result = evaluate("10盒折300 4盒折80", 1);
    let thresholds: Vec<u32> = result.hints.iter().map(|h| h.next_threshold).collect();
    assert_eq!(thresholds, vec![10, 4]);
}

// -----------------------------------------------------------------------
// evaluate scenarios
// -----------------------------------------------------------------------

#[test]
fn empty_text_yields_neutral_result() {
    for qty in [0, 1, 7, 100] {
        assert_eq!(evaluate("", qty), PromoEvaluation::default());
    }
}

#[test]
fn mixed_rules_threshold_already_met() {
    let result = evaluate("買3送1,5盒折100", 6);
    assert_eq!(result.earned_gift_count, 2);
    assert!(result.hints.is_empty());
}

#[test]
fn mixed_rules_below_every_threshold() {
    let result = evaluate("買3送1,5盒折100", 2);
    assert_eq!(result.earned_gift_count, 0);
    assert_eq!(
        result.hints,
        vec![PromoHint {
            next_threshold: 5,
            savings: 100,
            message: "再買 3 盒折 100 元".to_string(),
        }]
    );
}

#[test]
fn evaluation_serializes_camel_case() {
    let json = serde_json::to_value(evaluate("5盒折100", 2)).unwrap();
    assert_eq!(json["earnedGiftCount"], 0);
    assert_eq!(json["hints"][0]["nextThreshold"], 5);
    assert_eq!(json["hints"][0]["savings"], 100);
}
