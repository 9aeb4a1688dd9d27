// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An opaque seat token, e.g., a row-column label such as `A1`.
///
/// A seat is either free or selected; seats marked occupied by a prior
/// booking are never selectable (enforced by the caller, not here).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId {
    /// The seat label as shown in the auditorium map.
    value: String,
}

impl SeatId {
    /// Creates a new `SeatId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The seat label
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the seat label.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One of the fixed set of concession items sold alongside seats.
///
/// Each item has a fixed unit price (owned by the invoice calculator) and an
/// independently adjustable, never-negative quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcessionItem {
    /// Popcorn.
    Popcorn,
    /// Cola.
    Cola,
    /// Hotdog.
    Hotdog,
    /// Fries.
    Fries,
}

impl ConcessionItem {
    /// All items, in the fixed order used for invoice rows and display.
    pub const ALL: [Self; 4] = [Self::Popcorn, Self::Cola, Self::Hotdog, Self::Fries];

    /// Converts this item to its storage key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Popcorn => "popcorn",
            Self::Cola => "cola",
            Self::Hotdog => "hotdog",
            Self::Fries => "fries",
        }
    }

    /// Returns the capitalized display label for invoice rows.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Popcorn => "Popcorn",
            Self::Cola => "Cola",
            Self::Hotdog => "Hotdog",
            Self::Fries => "Fries",
        }
    }
}

impl FromStr for ConcessionItem {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popcorn" => Ok(Self::Popcorn),
            "cola" => Ok(Self::Cola),
            "hotdog" => Ok(Self::Hotdog),
            "fries" => Ok(Self::Fries),
            _ => Err(ValidationError::UnknownConcession(s.to_string())),
        }
    }
}

impl std::fmt::Display for ConcessionItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment method the visitor can pick at checkout.
///
/// Checkout requires an explicitly chosen method; no real payment processing
/// happens behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Visa card.
    Visa,
    /// Mastercard.
    Mastercard,
    /// PayPal.
    Paypal,
}

impl PaymentMethod {
    /// Converts this method to its form value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Paypal => "paypal",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visa" => Ok(Self::Visa),
            "mastercard" => Ok(Self::Mastercard),
            "paypal" => Ok(Self::Paypal),
            _ => Err(ValidationError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
