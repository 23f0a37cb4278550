//! # Checkout State
//!
//! Shared holder of the checkout wizard. The rules live in
//! [`shopfront_core::checkout`]; this store only serializes access.

use std::sync::{Arc, Mutex, PoisonError};

use shopfront_core::checkout::{PaymentDetails, Review, ShippingAddress};
use shopfront_core::{CheckoutStage, CheckoutState, CoreResult, Money};
use tracing::debug;

/// Shared checkout store. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct CheckoutStore {
    state: Arc<Mutex<CheckoutState>>,
}

impl CheckoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the wizard.
    pub fn with_checkout<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CheckoutState) -> R,
    {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Executes a function with write access to the wizard.
    pub fn with_checkout_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CheckoutState) -> R,
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    pub fn snapshot(&self) -> CheckoutState {
        self.with_checkout(|state| state.clone())
    }

    pub fn stage(&self) -> CheckoutStage {
        self.with_checkout(|state| state.stage)
    }

    pub fn order_total(&self) -> Money {
        self.with_checkout(CheckoutState::order_total)
    }

    /// Jumps to `stage` unchecked.
    pub fn set_step(&self, stage: CheckoutStage) {
        debug!(?stage, "Checkout step set");
        self.with_checkout_mut(|state| state.set_step(stage));
    }

    /// Jumps to the stage at `index`.
    pub fn set_step_index(&self, index: u8) -> CoreResult<CheckoutStage> {
        self.with_checkout_mut(|state| {
            state.set_step_index(index)?;
            debug!(stage = ?state.stage, "Checkout step set by index");
            Ok(state.stage)
        })
    }

    pub fn advance(&self) -> CoreResult<CheckoutStage> {
        self.with_checkout_mut(CheckoutState::advance)
    }

    pub fn back(&self) -> CoreResult<CheckoutStage> {
        self.with_checkout_mut(CheckoutState::back)
    }

    pub fn update_shipping_address(&self, address: ShippingAddress) {
        self.with_checkout_mut(|state| state.update_shipping_address(address));
    }

    pub fn update_payment_details(&self, details: PaymentDetails) {
        debug!(card = %details.masked_card_number(), "Payment details updated");
        self.with_checkout_mut(|state| state.update_payment_details(details));
    }

    pub fn update_review(&self, review: Review) {
        self.with_checkout_mut(|state| state.update_review(review));
    }

    pub fn reset(&self) {
        debug!("Checkout reset");
        self.with_checkout_mut(CheckoutState::reset);
    }
}
