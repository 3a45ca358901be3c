// The client-side Dioxus application logic.

use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

mod app_state;
mod app_state_mut;
mod components;
pub mod hooks;
mod screens;

use api::provider;
use api::{Deployment, MintWorkflow};
use app_state::AppState;
use app_state_mut::AppStateMut;
use screens::mint::MintScreen;

#[allow(non_snake_case)]
pub fn App() -> Element {
    // One chain handle for the whole session, injected into every operation
    // through the context. Running without a configured signer behaves like
    // a browser without a wallet extension.
    let workflow = use_hook(|| match provider::provider_from_env() {
        Ok(Some(provider)) => Some(Arc::new(MintWorkflow::new(provider, Deployment::TESTNET))),
        Ok(None) => {
            warn!("no signer key configured; running without a wallet");
            None
        }
        Err(err) => {
            warn!("wallet provider unavailable: {err}");
            None
        }
    });
    use_context_provider(|| AppState::new(workflow));

    let current_account = use_signal(|| None);
    let approved = use_signal(|| false);
    let balances = use_signal(|| None);
    use_context_provider(|| AppStateMut {
        current_account,
        approved,
        balances,
    });

    rsx! {
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.min.css",
        }
        MintScreen {}
    }
}
