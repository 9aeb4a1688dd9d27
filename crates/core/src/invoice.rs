// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invoice derivation: prices, line items, subtotal, tax, and total.
//!
//! Amounts are dollars as `f64`; rounding to cents happens only at display
//! time through [`format_amount`], never inside the arithmetic.

use crate::state::CartState;
use cine_book_domain::ConcessionItem;

/// Price of one seat, in dollars.
pub const SEAT_PRICE: f64 = 12.00;

/// Sales tax applied to the subtotal.
pub const TAX_RATE: f64 = 0.10;

/// Returns the unit price of a concession item, in dollars.
#[must_use]
pub const fn concession_unit_price(item: ConcessionItem) -> f64 {
    match item {
        ConcessionItem::Popcorn => 8.00,
        ConcessionItem::Cola => 4.50,
        ConcessionItem::Hotdog => 6.00,
        ConcessionItem::Fries => 5.50,
    }
}

/// One row of the booking summary.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// The row label (a seat label or a concession name).
    pub label: String,
    /// How many units the row covers.
    pub quantity: u32,
    /// The row amount in dollars (quantity times unit price).
    pub amount: f64,
}

/// A derived invoice: rows plus subtotal, tax, and total.
///
/// An invoice is a pure function of the cart; it is recomputed from scratch
/// after every cart change rather than updated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    /// The rows, seats first and then concessions in display order.
    pub lines: Vec<LineItem>,
    /// The sum of all row amounts, in dollars.
    pub subtotal: f64,
    /// The tax on the subtotal, in dollars.
    pub tax: f64,
    /// Subtotal plus tax, in dollars.
    pub total: f64,
}

/// Derives the invoice for a cart.
///
/// Each selected seat gets its own row; each concession with a nonzero
/// quantity gets one row. An empty cart yields an invoice with no rows and
/// all amounts zero.
#[must_use]
pub fn invoice_for(state: &CartState) -> Invoice {
    let mut lines: Vec<LineItem> = Vec::new();

    for seat in &state.seats {
        lines.push(LineItem {
            label: format!("Seat {seat}"),
            quantity: 1,
            amount: SEAT_PRICE,
        });
    }

    for (item, quantity) in state.quantities.iter() {
        if quantity > 0 {
            lines.push(LineItem {
                label: String::from(item.label()),
                quantity,
                amount: f64::from(quantity) * concession_unit_price(item),
            });
        }
    }

    let subtotal: f64 = lines.iter().map(|line| line.amount).sum();
    let tax: f64 = subtotal * TAX_RATE;
    let total: f64 = subtotal + tax;

    Invoice {
        lines,
        subtotal,
        tax,
        total,
    }
}

/// Formats a dollar amount for display, rounded to cents.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}
