//=============================================================================
// File: src/screens/mint.rs
//=============================================================================
use std::str::FromStr;

use api::MintAmount;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::address::AccountAddress;
use crate::components::balance_card::BalanceCard;
use crate::components::pico::{Button, Card, Container, Grid, Input, Modal};
use crate::hooks::use_account_sync;

const INPUT_ERROR_MESSAGE: &str = "Sorry, you can only mint integer amount less than 9";

const MINT_CSS: &str = r#"
    .page_title { text-align: center; font-size: 2rem; margin-top: 1rem; }
    .current_address { text-align: center; color: var(--pico-muted-color); margin-bottom: 1rem; min-height: 1.5rem; }
    .balance_title { text-align: center; color: var(--pico-muted-color); }
    .balance_value { text-align: center; font-size: 1.5rem; min-height: 2rem; }
    .mint_row { display: flex; justify-content: center; gap: 1rem; align-items: flex-end; }
    .input_error { text-align: center; color: var(--pico-color-red-500); min-height: 1.5rem; }
"#;

#[component]
pub fn MintScreen() -> Element {
    let state = use_context::<AppState>();
    let ui = use_context::<AppStateMut>();

    // Whenever the active account changes, re-run the approval gate and the
    // balance reader.
    use_account_sync();

    let mut mint_amount = use_signal(MintAmount::default);
    let mut mint_enable = use_signal(|| true);
    let mut input_error = use_signal(|| false);
    let mut show_install_notice = use_signal(|| false);

    // Non-intrusive connection check on mount. No authorized account means
    // no state change; the screen keeps showing the connect button.
    let mount_workflow = state.workflow.clone();
    use_future(move || {
        let workflow = mount_workflow.clone();
        let mut current_account = ui.current_account;
        async move {
            let Some(workflow) = workflow else {
                info!("no wallet provider is configured");
                return;
            };
            match workflow.authorized_account().await {
                Ok(Some(account)) => current_account.set(Some(account)),
                Ok(None) => {}
                Err(err) => warn!("connection check failed: {err}"),
            }
        }
    });

    let connect_workflow = state.workflow.clone();
    let connect_wallet = move |_| {
        let Some(workflow) = connect_workflow.clone() else {
            show_install_notice.set(true);
            return;
        };
        let mut current_account = ui.current_account;
        spawn(async move {
            match workflow.connect().await {
                Ok(account) => current_account.set(Some(account)),
                // A rejected prompt leaves the screen unchanged.
                Err(err) => warn!("wallet connection failed: {err}"),
            }
        });
    };

    let approve_workflow = state.workflow.clone();
    let approve = move |_| {
        let Some(workflow) = approve_workflow.clone() else {
            return;
        };
        let mut approved = ui.approved;
        spawn(async move {
            mint_enable.set(false);
            match workflow.approve().await {
                Ok(_) => approved.set(true),
                // Approval state stays false; the button unlocks for a
                // fresh attempt.
                Err(err) => warn!("approve failed: {err}"),
            }
            mint_enable.set(true);
        });
    };

    let mint_workflow = state.workflow.clone();
    let mint = move |_| {
        let Some(workflow) = mint_workflow.clone() else {
            return;
        };
        let Some(account) = *ui.current_account.read() else {
            return;
        };
        let amount = *mint_amount.read();
        let mut balances = ui.balances;
        spawn(async move {
            mint_enable.set(false);
            match workflow.mint(amount).await {
                Ok(_) => match workflow.balances(account).await {
                    Ok(fresh) => balances.set(Some(fresh)),
                    Err(err) => warn!("balance refresh failed: {err}"),
                },
                Err(err) => warn!("mint failed: {err}"),
            }
            mint_enable.set(true);
        });
    };

    let handle_amount_input = move |event: FormEvent| {
        input_error.set(false);
        mint_enable.set(true);
        match MintAmount::from_str(&event.value()) {
            Ok(amount) => mint_amount.set(amount),
            // Keep the last valid amount; only flag the input.
            Err(_) => input_error.set(true),
        }
    };

    let account = *ui.current_account.read();
    let balances = *ui.balances.read();
    let approved = *ui.approved.read();
    let processing = !mint_enable();

    rsx! {
        style { "{MINT_CSS}" }
        Modal {
            is_open: show_install_notice,
            title: "Wallet Required".to_string(),
            p { "Please install a wallet to continue." }
        }
        Container {
            div { class: "page_title", "Mint Token" }
            if let Some(account) = account {
                AccountAddress { account }
            } else {
                div { class: "current_address" }
            }
            Grid {
                BalanceCard {
                    title: "Minted Token".to_string(),
                    amount: balances.map(|b| b.mint_token),
                }
                BalanceCard {
                    title: "Buy Token".to_string(),
                    amount: balances.map(|b| b.buy_token),
                }
            }
            Card {
                if account.is_some() {
                    div { class: "mint_row",
                        Input {
                            label: "".to_string(),
                            name: "mint_amount",
                            input_type: "number".to_string(),
                            value: "{mint_amount}",
                            on_input: handle_amount_input,
                        }
                        if approved {
                            Button {
                                disabled: processing,
                                on_click: mint,
                                if processing { "Processing..." } else { "Mint" }
                            }
                        } else {
                            Button {
                                disabled: processing,
                                on_click: approve,
                                if processing { "Processing..." } else { "Approve" }
                            }
                        }
                    }
                    div { class: "input_error",
                        if input_error() { "{INPUT_ERROR_MESSAGE}" }
                    }
                } else {
                    Button {
                        on_click: connect_wallet,
                        "Connect Wallet"
                    }
                }
            }
        }
    }
}
