//! Custom Test Assertions
//!
//! Assertion helpers for fleet types with more useful failure messages than
//! a bare `assert_eq!`.

use core_kernel::{Litres, Money};
use domain_fleet::{ClientStats, FleetError};
use rust_decimal::Decimal;

/// Asserts that a Money value equals the given decimal amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a Litres value equals the given decimal quantity
pub fn assert_litres_eq(actual: &Litres, expected: Decimal) {
    assert_eq!(
        actual.value(),
        expected,
        "Litres mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that money values sum exactly to a total
pub fn assert_money_sum(parts: &[Money], total: &Money) {
    let sum: Money = parts.iter().copied().sum();
    assert_eq!(
        sum, *total,
        "Money parts sum to {} but expected {}",
        sum, total
    );
}

/// Asserts that a plate number is in its stored form
pub fn assert_plate_normalized(number: &str) {
    assert_eq!(
        number,
        number.trim().to_uppercase(),
        "Plate number '{}' is not trimmed and upper-cased",
        number
    );
}

/// Asserts that an error is a client lookup failure for `name`
pub fn assert_client_not_found(err: &FleetError, name: &str) {
    match err {
        FleetError::ClientNotFound(n) => assert_eq!(n, name, "Wrong client in error"),
        other => panic!("Expected ClientNotFound({}), got {:?}", name, other),
    }
}

/// Asserts that an error is a plate lookup failure for `number`
pub fn assert_plate_not_found(err: &FleetError, number: &str) {
    match err {
        FleetError::PlateNotFound(n) => assert_eq!(n, number, "Wrong plate in error"),
        other => panic!("Expected PlateNotFound({}), got {:?}", number, other),
    }
}

/// Asserts that stats carry no refill activity
pub fn assert_no_refills(stats: &ClientStats) {
    assert!(stats.total_amount.is_zero(), "Expected zero amount, got {}", stats.total_amount);
    assert!(stats.total_litres.is_zero(), "Expected zero litres, got {}", stats.total_litres);
    assert!(
        stats.last_payment.is_none(),
        "Expected no last payment, got {:?}",
        stats.last_payment
    );
    assert!(stats.efficiency.is_empty(), "Expected no per-plate spend");
}
