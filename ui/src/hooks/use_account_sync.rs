use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;

/// Re-runs the approval gate and the balance reader whenever the active
/// account changes, including the initial transition from unknown to known.
///
/// A failed balance read keeps the previous values on screen; a failed
/// allowance read resolves to not-approved.
pub fn use_account_sync() {
    let state = use_context::<AppState>();
    let ui = use_context::<AppStateMut>();

    use_effect(move || {
        let Some(account) = *ui.current_account.read() else {
            return;
        };
        let Some(workflow) = state.workflow.clone() else {
            return;
        };
        let mut approved = ui.approved;
        let mut balances = ui.balances;
        spawn(async move {
            approved.set(workflow.is_approved(account).await);
            match workflow.balances(account).await {
                Ok(fresh) => balances.set(Some(fresh)),
                Err(err) => dioxus_logger::tracing::warn!("balance read failed: {err}"),
            }
        });
    });
}
