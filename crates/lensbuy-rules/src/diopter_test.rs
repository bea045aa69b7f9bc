use super::*;

fn strs(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}

// -----------------------------------------------------------------------
// master_options
// -----------------------------------------------------------------------

#[test]
fn master_options_shape() {
    let master = master_options();
    assert_eq!(master.len(), 31);
    assert_eq!(master[0], "0.00");
    assert_eq!(master[1], "-0.50");
    assert_eq!(master[2], "-1.00");
    assert_eq!(master[3], "-1.25");
    assert_eq!(master[22], "-6.00");
    assert_eq!(master[23], "-6.50");
    assert_eq!(master[30], "-10.00");
}

#[test]
fn master_options_strictly_descending() {
    let master = master_options();
    let values: Vec<f64> = master.iter().map(|s| s.parse().unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn master_options_has_no_quarter_steps_past_six() {
    let master = master_options();
    assert!(!master.contains(&"-6.25".to_string()));
    assert!(!master.contains(&"-6.75".to_string()));
    assert!(!master.contains(&"-0.25".to_string()));
}

// -----------------------------------------------------------------------
// RangeEntry::parse
// -----------------------------------------------------------------------

#[test]
fn entry_span_sorts_endpoints() {
    assert_eq!(
        RangeEntry::parse("-1.00~-4.00"),
        Some(RangeEntry::Span {
            low: -4.0,
            high: -1.0
        })
    );
    assert_eq!(
        RangeEntry::parse("-4.00~-1.00"),
        Some(RangeEntry::Span {
            low: -4.0,
            high: -1.0
        })
    );
}

#[test]
fn entry_span_with_unreadable_endpoint_is_rejected() {
    assert!(RangeEntry::parse("-1.00~").is_none());
    assert!(RangeEntry::parse("~-3").is_none());
    assert!(RangeEntry::parse("a~b").is_none());
}

#[test]
fn entry_span_ignores_text_after_second_tilde() {
    assert_eq!(
        RangeEntry::parse("-1~-2~-9"),
        Some(RangeEntry::Span {
            low: -2.0,
            high: -1.0
        })
    );
}

#[test]
fn entry_exact_is_formatted() {
    assert_eq!(
        RangeEntry::parse("-1"),
        Some(RangeEntry::Exact {
            value: "-1.00".to_string()
        })
    );
}

// -----------------------------------------------------------------------
// filter
// -----------------------------------------------------------------------

#[test]
fn empty_text_returns_master_unchanged() {
    let master = master_options();
    assert_eq!(filter("", &master), master);

    let custom = strs(&["1.00", "x", "-3.00"]);
    assert_eq!(filter("", &custom), custom);
}

#[test]
fn span_selects_inclusive_numeric_window() {
    let master = master_options();
    let result = filter("-1.00~-4.00", &master);
    let expected: Vec<String> = master
        .iter()
        .filter(|s| {
            let v: f64 = s.parse().unwrap();
            (-4.0..=-1.0).contains(&v)
        })
        .cloned()
        .collect();
    assert_eq!(result, expected);
    assert_eq!(result.first().map(String::as_str), Some("-1.00"));
    assert_eq!(result.last().map(String::as_str), Some("-4.00"));
    assert_eq!(result.len(), 13);
}

#[test]
fn span_compares_numerically_not_lexically() {
    let master = master_options();
    assert_eq!(filter("-0.5~-1", &master), strs(&["-0.50", "-1.00"]));
}

#[test]
fn garbage_text_returns_empty() {
    let master = master_options();
    assert!(filter("abc", &master).is_empty());
    assert!(filter(" ", &master).is_empty());
    assert!(filter("、,", &master).is_empty());
}

#[test]
fn every_master_value_round_trips() {
    let master = master_options();
    for value in &master {
        assert_eq!(filter(value, &master), vec![value.clone()], "value {value}");
    }
}

#[test]
fn exact_value_short_form_matches() {
    let master = master_options();
    assert_eq!(filter("-1", &master), strs(&["-1.00"]));
    assert_eq!(filter("-6.5", &master), strs(&["-6.50"]));
    assert_eq!(filter("0", &master), strs(&["0.00"]));
    assert_eq!(filter("-0", &master), strs(&["0.00"]));
}

#[test]
fn exact_value_absent_from_master_is_dropped() {
    let master = master_options();
    assert!(filter("-6.25", &master).is_empty());
    assert!(filter("-12.00", &master).is_empty());
}

#[test]
fn mixed_separators_and_entries() {
    let master = master_options();
    assert_eq!(
        filter("0.00、-0.50~-2.00", &master),
        strs(&["0.00", "-0.50", "-1.00", "-1.25", "-1.50", "-1.75", "-2.00"])
    );
}

#[test]
fn ascii_commas_separate_entries() {
    let master = master_options();
    assert_eq!(
        filter("-8.00 , -3.00,-0.50", &master),
        strs(&["-0.50", "-3.00", "-8.00"])
    );
}

#[test]
fn fullwidth_comma_is_not_a_separator() {
    let master = master_options();
    assert_eq!(filter("-1.00，-2.00", &master), strs(&["-1.00"]));
    assert_eq!(
        filter("-1.00~-2.00，-5.00", &master),
        strs(&["-1.00", "-1.25", "-1.50", "-1.75", "-2.00"])
    );
}

#[test]
fn tiny_negative_exact_value_matches_nothing() {
    let master = master_options();
    assert!(filter("-0.001", &master).is_empty());
}

#[test]
fn infinite_span_endpoint_is_open_ended() {
    let master = master_options();
    assert_eq!(filter("-Infinity~0", &master), master);
    assert_eq!(filter("-6.00~-Infinity", &master).len(), 9);
    assert!(filter("Infinity", &master).is_empty());
}

#[test]
fn malformed_pieces_are_skipped_not_fatal() {
    let master = master_options();
    assert_eq!(filter("??, -2.00, foo~bar", &master), strs(&["-2.00"]));
}

#[test]
fn result_is_subset_of_master_in_master_order() {
    let master = master_options();
    let result = filter("-9.00, -5.00~-5.50, 0.00, -7.00~-6.50", &master);
    assert_eq!(
        result,
        strs(&["0.00", "-5.00", "-5.25", "-5.50", "-6.50", "-7.00", "-9.00"])
    );
}

#[test]
fn unrestricted_range_serializes_with_tag() {
    let json = serde_json::to_value(DiopterRange::parse("")).unwrap();
    assert_eq!(json["restriction"], "unrestricted");
}
