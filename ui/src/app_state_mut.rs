//! Defines the mutable, reactive state for the application's UI.

use alloy_primitives::Address;
use api::Balances;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for the state that changes and must trigger
/// re-renders. It is separate from the stable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The active wallet account, if one is connected.
    pub current_account: Signal<Option<Address>>,
    /// True iff the mint contract holds a nonzero buy-token allowance.
    pub approved: Signal<bool>,
    /// The latest fetched balances. `None` until the first successful read.
    pub balances: Signal<Option<Balances>>,
}
