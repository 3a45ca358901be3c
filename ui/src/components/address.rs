//=============================================================================
// File: src/components/address.rs
//=============================================================================
use alloy_primitives::Address;
use dioxus::prelude::*;

/// Shortens a displayed address to `first6...last4`.
///
/// Strings shorter than 10 characters are returned unchanged.
pub fn abbreviated(addr: &str) -> String {
    if addr.len() < 10 {
        return addr.to_string();
    }
    format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
}

/// The connected-address line under the page title. The full checksummed
/// address is available on hover.
#[component]
pub fn AccountAddress(account: Address) -> Element {
    let display = abbreviated(&account.to_string());
    rsx! {
        div {
            class: "current_address",
            title: "{account}",
            "Connected Address: {display}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::abbreviated;

    #[test]
    fn abbreviates_long_strings() {
        assert_eq!(
            abbreviated("0x5E9E06d8f09c2F0bAF2FCEA7b75a1435fAdf4D83"),
            "0x5E9E...4D83"
        );
        assert_eq!(abbreviated("0123456789"), "012345...6789");
    }

    #[test]
    fn leaves_short_strings_unchanged() {
        assert_eq!(abbreviated(""), "");
        assert_eq!(abbreviated("0x12345"), "0x12345");
        assert_eq!(abbreviated("123456789"), "123456789");
    }
}
