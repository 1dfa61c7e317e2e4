//! The order being built in a conversation.
//!
//! An [`OrderStore`] is an insertion-ordered list of [`OrderLine`]s keyed by
//! product name. Lines are only ever added one at a time and removed all
//! together, so the last line is always the most recently selected product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Formats an amount as dollars with two decimals, e.g. `$12.99`.
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

fn line_amount(unit_price: Decimal, quantity: u32) -> Option<Decimal> {
    unit_price.checked_mul(Decimal::from(quantity))
}

/// One product in the current order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    /// A freshly selected product with no quantity yet.
    pub fn new(product_name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            product_name: product_name.into(),
            unit_price,
            quantity: 0,
        }
    }

    /// `unit_price * quantity`, or `None` when it exceeds the `Decimal` range.
    pub fn subtotal(&self) -> Option<Decimal> {
        line_amount(self.unit_price, self.quantity)
    }
}

/// Insertion-ordered collection of order lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStore {
    lines: Vec<OrderLine>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, product_name: &str) -> bool {
        self.line(product_name).is_some()
    }

    pub fn line(&self, product_name: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.product_name == product_name)
    }

    /// Adds a line with quantity 0. Returns `false` and leaves the store untouched
    /// when the product is already present.
    pub fn insert(&mut self, product_name: &str, unit_price: Decimal) -> bool {
        if self.contains(product_name) {
            return false;
        }
        self.lines.push(OrderLine::new(product_name, unit_price));
        true
    }

    /// Overwrites the quantity of `product_name`, returning the updated line.
    pub fn set_quantity(&mut self, product_name: &str, quantity: u32) -> Option<&OrderLine> {
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.product_name == product_name)?;
        line.quantity = quantity;
        Some(&*line)
    }

    /// The most recently inserted line.
    pub fn last(&self) -> Option<&OrderLine> {
        self.lines.last()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// One `"{quantity} {name} - ${price} each\n"` row per line, in insertion order.
    pub fn summary(&self) -> String {
        self.lines.iter().fold(String::new(), |mut out, line| {
            let _ = writeln!(
                out,
                "{} {} - {} each",
                line.quantity,
                line.product_name,
                format_usd(line.unit_price)
            );
            out
        })
    }

    /// Sum of `unit_price * quantity` over all lines. Not rounded.
    ///
    /// `None` when the amount does not fit a `Decimal`.
    pub fn total(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.subtotal()?))
    }

    /// The total the order would have if `product_name` were set to `quantity`.
    pub fn total_with_quantity(&self, product_name: &str, quantity: u32) -> Option<Decimal> {
        self.lines.iter().try_fold(Decimal::ZERO, |sum, line| {
            let quantity = if line.product_name == product_name {
                quantity
            } else {
                line.quantity
            };
            sum.checked_add(line_amount(line.unit_price, quantity)?)
        })
    }
}
