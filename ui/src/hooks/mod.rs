mod use_account_sync;

pub use use_account_sync::use_account_sync;
