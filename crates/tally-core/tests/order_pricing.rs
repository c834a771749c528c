//! End-to-end pricing scenarios and properties of `OrderCalculator`.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use tally_core::{
    ConfigError, Money, OrderCalculator, OrderError, OrderItem, PricingConfig, ValidationError,
};

fn item(name: &str, cents: i64, qty: i64, category: &str) -> OrderItem {
    OrderItem::new(name, Money::from_cents(cents), qty, category)
}

#[test]
fn electronics_over_threshold_ships_free() {
    let total = OrderCalculator::new()
        .calculate_order_total(&[item("Monitor", 10000, 1, "ELECTRONICS")])
        .unwrap();
    assert_eq!(total.to_string(), "$110.00");
}

#[test]
fn bulk_books_get_discount_and_pay_shipping() {
    let total = OrderCalculator::new()
        .calculate_order_total(&[item("Rust in Action", 1000, 5, "BOOKS")])
        .unwrap();
    assert_eq!(total.to_string(), "$57.50");
}

#[test]
fn books_below_bulk_quantity_pay_full_price() {
    let total = OrderCalculator::new()
        .calculate_order_total(&[item("Rust in Action", 1000, 4, "BOOKS")])
        .unwrap();
    assert_eq!(total.to_string(), "$50.00");
}

#[test]
fn unregistered_category_passes_through() {
    let total = OrderCalculator::new()
        .calculate_order_total(&[item("Mouse Pad", 999, 2, "ACCESSORIES")])
        .unwrap();
    assert_eq!(total.to_string(), "$29.98");
}

#[test]
fn mixed_order_reaches_free_shipping_through_tax() {
    // 95.00 accessories + 4.55 × 1.10 electronics = 100.005 → free shipping
    let order = [
        item("Desk Mat", 9500, 1, "ACCESSORIES"),
        item("USB Cable", 455, 1, "Electronics"),
    ];
    let quote = OrderCalculator::new().quote(&order).unwrap();
    assert!(quote.has_free_shipping());
    assert_eq!(quote.total, Money::from_cents(10001));
}

#[test]
fn subtotal_exactly_at_threshold_ships_free() {
    let order = [
        item("Notebook", 2500, 2, "STATIONERY"),
        item("Pen Set", 5000, 1, "STATIONERY"),
    ];
    let quote = OrderCalculator::new().quote(&order).unwrap();
    assert_eq!(quote.subtotal, Money::from_cents(10000));
    assert_eq!(quote.shipping, Money::zero());
    assert_eq!(quote.total, Money::from_cents(10000));
}

#[test]
fn invalid_orders_report_reason() {
    let calculator = OrderCalculator::new();

    let err = calculator.calculate_order_total(&[]).unwrap_err();
    assert!(matches!(err, OrderError::InvalidOrder(ValidationError::EmptyOrder)));

    let err = calculator
        .calculate_order_total(&[item("Novel", 1000, 0, "BOOKS")])
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid quantity for item Novel");

    let err = calculator
        .calculate_order_total(&[item("Novel", -1, 1, "BOOKS")])
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid price for item Novel");

    let err = calculator
        .calculate_order_total(&[item("  ", 100, 1, "BOOKS")])
        .unwrap_err();
    assert_eq!(err.to_string(), "Product name cannot be empty");
}

#[test]
fn order_read_from_json() {
    let json = r#"[
        {"product_name": "Laptop", "unit_price_cents": 99999, "quantity": 1, "category": "ELECTRONICS"},
        {"product_name": "Programming Books", "unit_price_cents": 2999, "quantity": 6, "category": "BOOKS"},
        {"product_name": "Mouse Pad", "unit_price_cents": 999, "quantity": 2, "category": "ACCESSORIES"}
    ]"#;
    let order: Vec<OrderItem> = serde_json::from_str(json).unwrap();

    let total = OrderCalculator::new().calculate_order_total(&order).unwrap();
    assert_eq!(total.to_string(), "$1290.91");
}

#[test]
fn out_of_range_config_is_rejected_before_pricing() {
    let oversized_discount = PricingConfig {
        book_discount_bps: 25_000,
        ..PricingConfig::default()
    };
    let err = OrderCalculator::from_config(&oversized_discount).unwrap_err();
    assert_eq!(
        err,
        ConfigError::OutOfRange {
            field: "book_discount_bps".to_string(),
            min: 0,
            max: 10_000,
        }
    );

    let negative_shipping = PricingConfig {
        standard_shipping_cents: -5000,
        ..PricingConfig::default()
    };
    assert!(OrderCalculator::from_config(&negative_shipping).is_err());
}

#[test]
fn calculator_is_shareable_across_threads() {
    let calculator = Arc::new(OrderCalculator::new());
    let handles: Vec<_> = (1..=4)
        .map(|qty| {
            let calculator = Arc::clone(&calculator);
            thread::spawn(move || {
                calculator
                    .calculate_order_total(&[item("Novel", 1000, qty, "BOOKS")])
                    .unwrap()
            })
        })
        .collect();

    let totals: Vec<Money> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        totals,
        vec![
            Money::from_cents(2000),
            Money::from_cents(3000),
            Money::from_cents(4000),
            Money::from_cents(5000),
        ]
    );
}

// =============================================================================
// Properties
// =============================================================================

fn arb_item() -> impl Strategy<Value = OrderItem> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,20}",
        0i64..100_000,
        1i64..50,
        prop::sample::select(vec!["ELECTRONICS", "books", "Books", "ACCESSORIES", ""]),
    )
        .prop_map(|(name, cents, qty, category)| OrderItem::new(name, Money::from_cents(cents), qty, category))
}

/// An order together with an arbitrary permutation of it.
fn arb_order_and_shuffle() -> impl Strategy<Value = (Vec<OrderItem>, Vec<OrderItem>)> {
    prop::collection::vec(arb_item(), 1..20)
        .prop_flat_map(|order| (Just(order.clone()), Just(order).prop_shuffle()))
}

fn arb_valid_config() -> impl Strategy<Value = PricingConfig> {
    (0u32..=10_000, 0u32..=10_000, 1i64..20, 0i64..1_000_000, 0i64..10_000).prop_map(
        |(tax, discount, bulk, threshold, shipping)| PricingConfig {
            electronics_tax_bps: tax,
            book_discount_bps: discount,
            book_bulk_quantity: bulk,
            free_shipping_threshold_cents: threshold,
            standard_shipping_cents: shipping,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    /// Property: same order in, same total out.
    #[test]
    fn total_is_deterministic(order in prop::collection::vec(arb_item(), 1..20)) {
        let calculator = OrderCalculator::new();
        let first = calculator.calculate_order_total(&order).unwrap();
        let second = calculator.calculate_order_total(&order).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: item order does not change the total.
    #[test]
    fn total_ignores_item_order((order, shuffled) in arb_order_and_shuffle()) {
        let calculator = OrderCalculator::new();
        prop_assert_eq!(
            calculator.calculate_order_total(&order).unwrap(),
            calculator.calculate_order_total(&shuffled).unwrap()
        );
    }

    /// Property: valid orders never total below zero, and at least the flat
    /// shipping when the subtotal is under the threshold.
    #[test]
    fn total_is_non_negative(order in prop::collection::vec(arb_item(), 1..20)) {
        let quote = OrderCalculator::new().quote(&order).unwrap();
        prop_assert!(!quote.total.is_negative());
        if !quote.has_free_shipping() {
            prop_assert!(quote.total >= Money::from_cents(1000));
        }
    }

    /// Property: any configuration that passes validation keeps totals
    /// non-negative.
    #[test]
    fn valid_config_total_is_non_negative(
        config in arb_valid_config(),
        order in prop::collection::vec(arb_item(), 1..20),
    ) {
        let calculator = OrderCalculator::from_config(&config).unwrap();
        let total = calculator.calculate_order_total(&order).unwrap();
        prop_assert!(!total.is_negative());
    }

    /// Property: the quote and the plain total agree.
    #[test]
    fn quote_matches_total(order in prop::collection::vec(arb_item(), 1..20)) {
        let calculator = OrderCalculator::new();
        let quote = calculator.quote(&order).unwrap();
        prop_assert_eq!(quote.total, calculator.calculate_order_total(&order).unwrap());
        prop_assert_eq!(quote.lines.len(), order.len());
    }
}
