use api::TokenAmount;
use dioxus::prelude::*;

use crate::components::pico::Card;

/// One of the two balance cards on the mint screen. Shows nothing until the
/// first successful read.
#[component]
pub fn BalanceCard(title: String, amount: Option<TokenAmount>) -> Element {
    rsx! {
        Card {
            div { class: "balance_title", "{title}" }
            div { class: "balance_value",
                if let Some(amount) = amount {
                    "{amount}"
                }
            }
        }
    }
}
