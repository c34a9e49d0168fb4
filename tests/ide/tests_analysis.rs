//! Batch validation and the swappable shared parser.

use std::sync::Arc;
use std::thread;

use eressea::ide::{SharedOrderParser, validate_orders};
use eressea::parser::ErrorCode;
use eressea::rules::RuleSet;
use eressea::{Locale, OrderKeyword};

use crate::helpers::fixtures::german;

#[test]
fn test_validate_orders_matches_sequential_parse() {
    let parser = german();
    let lines: Vec<String> = (0..200)
        .map(|i| match i % 4 {
            0 => format!("GIB {i} 5 Silber"),
            1 => "ARBEITE".to_string(),
            2 => format!("LERNE Magie {i}"),
            _ => "FROBNICATE".to_string(),
        })
        .collect();

    let results = validate_orders(&parser, &lines);
    assert_eq!(results.len(), lines.len());
    for (line, result) in lines.iter().zip(&results) {
        assert_eq!(result.order, parser.parse(line).order, "{line}");
    }
    assert_eq!(results.iter().filter(|r| !r.valid()).count(), 50);
}

#[test]
fn test_validate_reports_errors_per_line() {
    let results = validate_orders(&german(), &["GIB abc 5 Gold", "ARBEITE"]);
    assert_eq!(results[0].errors[0].code, ErrorCode::E0501);
    assert!(results[1].errors.is_empty());
}

#[test]
fn test_shared_parser_locale_switch() {
    let shared = SharedOrderParser::new(german());
    assert_eq!(shared.parse("ARBEITE").order.verb, Some(OrderKeyword::Work));

    shared.set_locale(Locale::English).unwrap();
    assert_eq!(shared.load().locale(), Locale::English);
    assert!(shared.parse("GIVE 1 5 Silver").valid());
    assert!(!shared.parse("GIB 1 5 Silber").valid());
}

#[test]
fn test_shared_parser_across_threads() {
    let shared = SharedOrderParser::new(german());
    // snapshots taken before the swap keep the old rules
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let snapshot = shared.load();
            thread::spawn(move || (0..50).all(|_| snapshot.parse("GIB 1 5 Silber").valid()))
        })
        .collect();
    shared.set_rules(Arc::new(RuleSet::empty())).unwrap();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert!(!shared.parse("GIB 1 5 Silber").valid());
}

#[test]
fn test_shared_validate_uses_current_parser() {
    let shared = SharedOrderParser::new(german());
    shared.replace(crate::helpers::fixtures::english());
    let results = shared.validate(&["WORK", "ARBEITE"]);
    assert!(results[0].valid());
    assert!(!results[1].valid());
}
