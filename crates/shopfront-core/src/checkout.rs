//! # Checkout Wizard
//!
//! State of the multi-step checkout: the current stage plus three field
//! groups that are each replaced wholesale.
//!
//! ## Stages and Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐  advance  ┌──────────┐  advance  ┌──────────┐  advance   │
//! │   │ Shipping │──────────►│ Payment  │──────────►│  Review  │─────────┐  │
//! │   │   (0)    │◄──────────│   (1)    │◄──────────│   (2)    │         │  │
//! │   └──────────┘   back    └──────────┘   back    └──────────┘         │  │
//! │        ▲                                     │                       ▼  │
//! │        └─────────── back (edit address) ─────┘               ┌────────┐ │
//! │        ▲                                                     │Complete│ │
//! │        └──────────────────── reset ──────────────────────────│  (3)   │ │
//! │                                                              └────────┘ │
//! │                                                                         │
//! │  Checked moves (transition_to / advance / back) follow this table.      │
//! │  set_step jumps anywhere; whether skipping is allowed is decided by the │
//! │  presentation layer, not here.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::ProductId;

// =============================================================================
// Checkout Stage
// =============================================================================

/// A stage of the checkout wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    #[default]
    Shipping,
    Payment,
    Review,
    Complete,
}

impl CheckoutStage {
    /// Every stage in wizard order.
    pub const ALL: [CheckoutStage; 4] = [
        CheckoutStage::Shipping,
        CheckoutStage::Payment,
        CheckoutStage::Review,
        CheckoutStage::Complete,
    ];

    /// Ordinal position in the wizard (0-based).
    pub const fn index(self) -> u8 {
        match self {
            CheckoutStage::Shipping => 0,
            CheckoutStage::Payment => 1,
            CheckoutStage::Review => 2,
            CheckoutStage::Complete => 3,
        }
    }

    /// Stepper label.
    pub const fn label(self) -> &'static str {
        match self {
            CheckoutStage::Shipping => "Shipping address",
            CheckoutStage::Payment => "Payment details",
            CheckoutStage::Review => "Review your order",
            CheckoutStage::Complete => "Order placed",
        }
    }

    /// The stage after this one, if any.
    pub fn next(self) -> Option<CheckoutStage> {
        Self::ALL.get(usize::from(self.index()) + 1).copied()
    }

    /// The stage before this one, if any.
    pub fn previous(self) -> Option<CheckoutStage> {
        usize::from(self.index())
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Transition table for checked moves.
    ///
    /// - forward by exactly one stage
    /// - back to any earlier stage, except out of `Complete`
    /// - staying put is always allowed
    pub fn can_transition_to(self, to: CheckoutStage) -> bool {
        use CheckoutStage::*;
        match (self, to) {
            (from, to) if from == to => true,
            (Shipping, Payment) | (Payment, Review) | (Review, Complete) => true,
            (Payment, Shipping) | (Review, Shipping) | (Review, Payment) => true,
            _ => false,
        }
    }
}

impl TryFrom<u8> for CheckoutStage {
    type Error = CoreError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CoreError::UnknownStep(index))
    }
}

// =============================================================================
// Field Groups
// =============================================================================

/// Where the order ships to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Card details as typed into the payment step.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl PaymentDetails {
    /// Card number reduced to its last four digits, e.g. `**** 4242`.
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("**** {}", tail)
    }
}

impl std::fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("card_name", &self.card_name)
            .field("card_number", &self.masked_card_number())
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"***")
            .finish()
    }
}

/// One line of the order review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl ReviewItem {
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// The order review group.
pub type Review = Vec<ReviewItem>;

// =============================================================================
// Checkout State
// =============================================================================

/// The whole checkout wizard.
///
/// ## Invariants
/// - Each field group is replaced as a unit; updating one never touches
///   another.
/// - `stage` is always one of the four wizard stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutState {
    pub stage: CheckoutStage,
    pub shipping_address: ShippingAddress,
    pub payment_details: PaymentDetails,
    pub review: Review,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jumps to `stage` without consulting the transition table.
    pub fn set_step(&mut self, stage: CheckoutStage) {
        self.stage = stage;
    }

    /// Jumps to the stage at `index`; only the wizard bounds are checked.
    pub fn set_step_index(&mut self, index: u8) -> CoreResult<()> {
        self.stage = CheckoutStage::try_from(index)?;
        Ok(())
    }

    /// Moves to `to` if the transition table allows it.
    pub fn transition_to(&mut self, to: CheckoutStage) -> CoreResult<()> {
        if !self.stage.can_transition_to(to) {
            return Err(CoreError::InvalidStepTransition {
                from: self.stage,
                to,
            });
        }
        self.stage = to;
        Ok(())
    }

    /// Moves one stage forward.
    pub fn advance(&mut self) -> CoreResult<CheckoutStage> {
        let to = self.stage.next().ok_or(CoreError::InvalidStepTransition {
            from: self.stage,
            to: self.stage,
        })?;
        self.transition_to(to)?;
        Ok(to)
    }

    /// Moves one stage back.
    pub fn back(&mut self) -> CoreResult<CheckoutStage> {
        let to = self.stage.previous().ok_or(CoreError::InvalidStepTransition {
            from: self.stage,
            to: self.stage,
        })?;
        self.transition_to(to)?;
        Ok(to)
    }

    pub fn update_shipping_address(&mut self, address: ShippingAddress) {
        self.shipping_address = address;
    }

    pub fn update_payment_details(&mut self, details: PaymentDetails) {
        self.payment_details = details;
    }

    pub fn update_review(&mut self, review: Review) {
        self.review = review;
    }

    /// Starts a fresh order.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sum of the review lines, saturating at `i64::MAX` cents.
    pub fn order_total(&self) -> Money {
        self.review.iter().map(ReviewItem::line_total).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.stage == CheckoutStage::Complete
    }
}
