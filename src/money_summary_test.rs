#![allow(clippy::float_cmp)]

use super::*;
use crate::testing::FakeText;

fn run(net: &FakeText, tax: &FakeText, gross: &FakeText) -> Option<MoneySummary> {
    format_money_summary(Some(net), Some(tax), Some(gross), &MoneyFormat::default())
}

#[test]
fn formats_all_three_amounts() {
    let (net, tax, gross) = (FakeText::new("100.00"), FakeText::new("23.00"), FakeText::new(""));
    let summary = run(&net, &tax, &gross).unwrap();
    assert_eq!(summary, MoneySummary { net: 100.0, tax: 23.0, gross: 123.0 });
    assert_eq!(net.current(), "100.00 PLN");
    assert_eq!(tax.current(), "23.00 PLN");
    assert_eq!(gross.current(), "123.00 PLN");
}

#[test]
fn empty_net_is_zero() {
    let (net, tax, gross) = (FakeText::new(""), FakeText::new("10"), FakeText::new("?"));
    run(&net, &tax, &gross).unwrap();
    assert_eq!(net.current(), "0.00 PLN");
    assert_eq!(tax.current(), "10.00 PLN");
    assert_eq!(gross.current(), "10.00 PLN");
}

#[test]
fn non_numeric_text_is_zero() {
    let (net, tax, gross) = (FakeText::new("n/a"), FakeText::new("abc"), FakeText::new(""));
    run(&net, &tax, &gross).unwrap();
    assert_eq!(gross.current(), "0.00 PLN");
}

#[test]
fn gross_ignores_its_own_rendered_text() {
    let (net, tax, gross) = (FakeText::new("1"), FakeText::new("2"), FakeText::new("999"));
    run(&net, &tax, &gross).unwrap();
    assert_eq!(gross.current(), "3.00 PLN");
}

#[test]
fn gross_uses_plain_float_addition() {
    let summary = MoneySummary::from_texts("0.1", "0.2");
    assert_eq!(summary.gross, 0.1 + 0.2);
}

#[test]
fn missing_gross_leaves_everything_untouched() {
    let (net, tax) = (FakeText::new("100.00"), FakeText::new("23.00"));
    let result = format_money_summary(Some(&net), Some(&tax), None, &MoneyFormat::default());
    assert!(result.is_none());
    assert_eq!(net.current(), "100.00");
    assert_eq!(tax.current(), "23.00");
    assert_eq!(net.writes.get() + tax.writes.get(), 0);
}

#[test]
fn missing_net_or_tax_skips_operation() {
    let (tax, gross) = (FakeText::new("23.00"), FakeText::new("0"));
    assert!(format_money_summary(None, Some(&tax), Some(&gross), &MoneyFormat::default()).is_none());
    assert_eq!(gross.writes.get(), 0);

    let net = FakeText::new("1");
    assert!(format_money_summary(Some(&net), None, Some(&gross), &MoneyFormat::default()).is_none());
    assert_eq!(net.writes.get(), 0);
}

// Formatting is idempotent: a second pass re-parses "100.00 PLN" as 100 and
// recomputes gross from net and tax, so neither the suffix nor the sum compound.
#[test]
fn running_twice_is_idempotent() {
    let (net, tax, gross) = (FakeText::new("100.00"), FakeText::new("23.00"), FakeText::new(""));
    run(&net, &tax, &gross).unwrap();
    let first = (net.current(), tax.current(), gross.current());
    let second_summary = run(&net, &tax, &gross).unwrap();
    assert_eq!((net.current(), tax.current(), gross.current()), first);
    assert_eq!(second_summary.gross, 123.0);
}

#[test]
fn idempotent_with_custom_format() {
    let format = MoneyFormat { precision: 1, separator: String::new(), suffix: "zł".into() };
    let (net, tax, gross) = (FakeText::new("4.25"), FakeText::new("1"), FakeText::new(""));
    format_money_summary(Some(&net), Some(&tax), Some(&gross), &format).unwrap();
    assert_eq!(net.current(), "4.3zł");
    assert_eq!(gross.current(), "5.3zł");
    format_money_summary(Some(&net), Some(&tax), Some(&gross), &format).unwrap();
    assert_eq!(net.current(), "4.3zł");
    assert_eq!(gross.current(), "5.3zł");
}

// Amounts finer than the display precision are rounded on the first pass, so
// a second pass sums the rounded values. The output is stable from then on.
#[test]
fn sub_precision_inputs_settle_after_first_pass() {
    let (net, tax, gross) = (FakeText::new("0.125"), FakeText::new("0.125"), FakeText::new(""));
    run(&net, &tax, &gross).unwrap();
    assert_eq!(
        (net.current(), tax.current(), gross.current()),
        ("0.13 PLN".into(), "0.13 PLN".into(), "0.25 PLN".into())
    );

    run(&net, &tax, &gross).unwrap();
    assert_eq!(gross.current(), "0.26 PLN");
    run(&net, &tax, &gross).unwrap();
    assert_eq!(gross.current(), "0.26 PLN");
}
