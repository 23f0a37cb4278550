//! # Checkout Commands
//!
//! Stepper navigation and the three field groups of the checkout wizard.
//!
//! ## Wizard Screens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   (1) Shipping address ── (2) Payment details ── (3) Review your order  │
//! │                                                                         │
//! │   [Back]                                                       [Next]   │
//! │     │                                                             │     │
//! │     ▼                                                             ▼     │
//! │   previous_checkout_step()                          next_checkout_step()│
//! │                                                                         │
//! │   Stepper click ──► set_checkout_step(index)   (jumps, bounds only)     │
//! │   Form blur     ──► update_shipping_address / update_payment_details    │
//! │   Place order   ──► next_checkout_step() from Review ──► Order placed   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_core::checkout::{PaymentDetails, Review, ShippingAddress};
use shopfront_core::{CheckoutState, Money};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::CheckoutStore;

/// Wizard state plus what the stepper and summary display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub state: CheckoutState,
    pub step_index: u8,
    pub stage_label: &'static str,
    pub order_total: Money,
}

impl From<&CheckoutState> for CheckoutResponse {
    fn from(state: &CheckoutState) -> Self {
        CheckoutResponse {
            state: state.clone(),
            step_index: state.stage.index(),
            stage_label: state.stage.label(),
            order_total: state.order_total(),
        }
    }
}

fn respond(checkout: &CheckoutStore) -> CheckoutResponse {
    checkout.with_checkout(|state| CheckoutResponse::from(state))
}

pub fn get_checkout(checkout: &CheckoutStore) -> CheckoutResponse {
    debug!("get_checkout command");
    respond(checkout)
}

/// Jumps to the stage at `index` (0 = shipping ... 3 = order placed).
pub fn set_checkout_step(checkout: &CheckoutStore, index: u8) -> ApiResult<CheckoutResponse> {
    debug!(index, "set_checkout_step command");
    checkout.set_step_index(index)?;
    Ok(respond(checkout))
}

pub fn next_checkout_step(checkout: &CheckoutStore) -> ApiResult<CheckoutResponse> {
    debug!("next_checkout_step command");
    checkout.advance()?;
    Ok(respond(checkout))
}

pub fn previous_checkout_step(checkout: &CheckoutStore) -> ApiResult<CheckoutResponse> {
    debug!("previous_checkout_step command");
    checkout.back()?;
    Ok(respond(checkout))
}

pub fn update_shipping_address(checkout: &CheckoutStore, address: ShippingAddress) -> CheckoutResponse {
    debug!("update_shipping_address command");
    checkout.update_shipping_address(address);
    respond(checkout)
}

pub fn update_payment_details(checkout: &CheckoutStore, details: PaymentDetails) -> CheckoutResponse {
    debug!("update_payment_details command");
    checkout.update_payment_details(details);
    respond(checkout)
}

pub fn update_review(checkout: &CheckoutStore, review: Review) -> CheckoutResponse {
    debug!(lines = review.len(), "update_review command");
    checkout.update_review(review);
    respond(checkout)
}

/// Starts a new order.
pub fn reset_checkout(checkout: &CheckoutStore) -> CheckoutResponse {
    debug!("reset_checkout command");
    checkout.reset();
    respond(checkout)
}
