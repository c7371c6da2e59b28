//! End-to-end invoice scenarios against the public API.

use harvest_core::coerce::coerce_number;
use harvest_core::invoice::{order_totals, procurement_totals, Invoiceable, LineTotalSource};
use harvest_core::types::{LineItem, Order, ProductCharges, Procurement, TaxRates};
use harvest_core::words::{amount_to_words, amount_to_words_with, ScaleGrouping};
use harvest_core::{CoreError, Money};
use serde_json::json;

fn charges(cgst: f64, sgst: f64, fee: f64) -> ProductCharges {
    ProductCharges::new(cgst, sgst, fee)
}

#[test]
fn procurement_with_tax_and_delivery() {
    let items = vec![LineItem::new(2.0, 50.0)];
    let totals = procurement_totals(&items, TaxRates::new(5.0, 5.0), 10.0);

    assert_eq!(totals.subtotal, 100.0);
    assert_eq!(totals.cgst_amount, 5.0);
    assert_eq!(totals.sgst_amount, 5.0);
    assert_eq!(totals.grand_total_money().to_string(), "₹120.00");
}

#[test]
fn procurement_without_tax_or_delivery() {
    let items = vec![LineItem::new(3.0, 33.33)];
    let totals = procurement_totals(&items, TaxRates::zero(), 0.0);

    assert_eq!(totals.grand_total_money().to_string(), "₹99.99");
}

#[test]
fn empty_documents_total_zero() {
    let order = Order::new("ORD-1", Vec::new());
    let procurement = Procurement::new("PR-1", Vec::new(), TaxRates::new(9.0, 9.0), 25.0);

    for totals in [
        order.totals(LineTotalSource::default()),
        procurement.totals(LineTotalSource::default()),
    ] {
        assert_eq!(totals.grand_total, 0.0);
        assert_eq!(amount_to_words(totals.grand_total).unwrap(), "Zero Rupees");
    }
}

#[test]
fn grand_total_covers_subtotal_for_non_negative_inputs() {
    let items = vec![
        LineItem::new(1.5, 40.0).with_product(charges(2.5, 2.5, 5.0)),
        LineItem::new(4.0, 12.25).with_product(charges(0.0, 0.0, 0.0)),
        LineItem::new(0.0, 99.0).with_product(charges(6.0, 6.0, 15.0)),
    ];
    let totals = order_totals(&items, LineTotalSource::Recompute);

    assert!(totals.subtotal >= 0.0);
    assert!(totals.grand_total >= totals.subtotal);
}

/// Every ordering of `items`, built by swapping each element to the front.
fn permutations(items: &[LineItem]) -> Vec<Vec<LineItem>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut all = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let first = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first.clone());
            all.push(tail);
        }
    }
    all
}

fn mixed_lines() -> Vec<LineItem> {
    vec![
        LineItem::new(2.0, 19.95).with_product(charges(2.5, 2.5, 10.0)),
        LineItem::new(7.0, 3.5).with_product(charges(9.0, 9.0, 0.0)),
        LineItem::new(1.0, 250.0).with_product(charges(0.0, 0.0, 30.0)),
        LineItem::new(0.75, 64.4).with_product(charges(6.0, 6.0, 5.0)),
    ]
}

#[test]
fn reordering_order_items_keeps_grand_total() {
    let orderings = permutations(&mixed_lines());
    assert_eq!(orderings.len(), 24);

    for items in &orderings {
        let totals = order_totals(items, LineTotalSource::Recompute);
        assert_eq!(totals.grand_total_money(), Money::from_paise(41990));
    }
}

#[test]
fn reordering_procurement_items_keeps_grand_total() {
    for items in permutations(&mixed_lines()) {
        let totals = procurement_totals(&items, TaxRates::new(5.0, 6.0), 12.5);
        assert_eq!(totals.grand_total_money(), Money::from_paise(41510));
    }
}

#[test]
fn malformed_price_contributes_zero() {
    let bad_price = coerce_number(&json!("abc"));
    let items = vec![
        LineItem::new(2.0, bad_price),
        LineItem::new(1.0, 10.0),
    ];
    let totals = procurement_totals(&items, TaxRates::zero(), 0.0);

    assert_eq!(bad_price, 0.0);
    assert_eq!(totals.grand_total_money(), Money::from_paise(1000));
}

#[test]
fn words_for_whole_and_fractional_amounts() {
    assert_eq!(
        amount_to_words(1234.50).unwrap(),
        "One Thousand Two Hundred Thirty Four Rupees and Fifty Paise"
    );
    assert_eq!(amount_to_words(0.0).unwrap(), "Zero Rupees");
    assert_eq!(
        amount_to_words_with(2_50_00_000.0, ScaleGrouping::Indian).unwrap(),
        "Two Crore Fifty Lakh Rupees"
    );
}

#[test]
fn words_reject_invalid_amounts() {
    assert!(matches!(amount_to_words(-1.0), Err(CoreError::NegativeAmount(_))));
    assert!(matches!(amount_to_words(f64::NAN), Err(CoreError::NonFiniteAmount)));
    assert!(matches!(
        amount_to_words(1e15),
        Err(CoreError::AmountTooLarge { .. })
    ));
}
