use std::sync::{Arc, Mutex};

use alloy_primitives::{address, Address, Bytes, TxHash, U256};
use alloy_sol_types::SolCall;
use api::deployment::{self, Deployment};
use api::erc20::{IERC20, IMinter};
use api::test_utils::MockWalletProvider;
use api::{MintAmount, MintWorkflow, WalletError, WalletProvider};
use async_trait::async_trait;
use tokio::sync::{oneshot, Notify};

const ACCOUNT: Address = address!("00000000000000000000000000000000000000Aa");

fn fixture() -> (Arc<MockWalletProvider>, MintWorkflow) {
    let deployment = Deployment::TESTNET;
    let provider = Arc::new(MockWalletProvider::new(deployment));
    let workflow = MintWorkflow::new(provider.clone(), deployment);
    (provider, workflow)
}

#[tokio::test]
async fn connection_check_is_silent_without_authorized_accounts() {
    let (provider, workflow) = fixture();

    assert_eq!(workflow.authorized_account().await.unwrap(), None);

    provider.authorize(ACCOUNT);
    assert_eq!(workflow.authorized_account().await.unwrap(), Some(ACCOUNT));
}

#[tokio::test]
async fn connect_adopts_the_granted_account() {
    let (provider, workflow) = fixture();

    provider.allow_connection(ACCOUNT);
    assert_eq!(workflow.connect().await.unwrap(), ACCOUNT);

    // The granted account is authorized from then on.
    assert_eq!(workflow.authorized_account().await.unwrap(), Some(ACCOUNT));
}

#[tokio::test]
async fn connect_fails_when_authorization_is_rejected() {
    let (provider, workflow) = fixture();

    provider.deny_connection(true);
    assert!(workflow.connect().await.is_err());
    assert_eq!(workflow.authorized_account().await.unwrap(), None);
}

#[tokio::test]
async fn approval_gate_reflects_the_allowance() {
    let (provider, workflow) = fixture();
    let deployment = *workflow.deployment();

    assert!(!workflow.is_approved(ACCOUNT).await);

    provider.set_allowance(
        deployment.buy_token.address,
        ACCOUNT,
        deployment.minter,
        U256::from(1u64),
    );
    assert!(workflow.is_approved(ACCOUNT).await);
}

#[tokio::test]
async fn approval_gate_is_conservative_on_read_failure() {
    let (provider, workflow) = fixture();
    let deployment = *workflow.deployment();

    provider.set_allowance(
        deployment.buy_token.address,
        ACCOUNT,
        deployment.minter,
        deployment::infinite_allowance(),
    );
    assert!(workflow.is_approved(ACCOUNT).await);

    provider.fail_reads(true);
    assert!(!workflow.is_approved(ACCOUNT).await);
}

#[tokio::test]
async fn approve_grants_the_infinite_allowance() {
    let (provider, workflow) = fixture();
    let deployment = *workflow.deployment();
    provider.authorize(ACCOUNT);

    workflow.approve().await.unwrap();

    assert!(workflow.is_approved(ACCOUNT).await);

    let sent = provider.sent_transactions();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, deployment.buy_token.address);
    let call = IERC20::approveCall::abi_decode(&sent[0].data, true).unwrap();
    assert_eq!(call.spender, deployment.minter);
    assert_eq!(call.amount, deployment::infinite_allowance());
}

#[tokio::test]
async fn mint_scales_the_amount_to_base_units() {
    let (provider, workflow) = fixture();
    let deployment = *workflow.deployment();
    provider.authorize(ACCOUNT);

    let amount: MintAmount = "7".parse().unwrap();
    workflow.mint(amount).await.unwrap();

    let sent = provider.sent_transactions();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, deployment.minter);
    let call = IMinter::mintCall::abi_decode(&sent[0].data, true).unwrap();
    assert_eq!(call.amount, U256::from(7_000_000u64));
}

#[tokio::test]
async fn balances_reflect_a_confirmed_mint() {
    let (provider, workflow) = fixture();
    let deployment = *workflow.deployment();
    provider.authorize(ACCOUNT);
    provider.set_balance(
        deployment.buy_token.address,
        ACCOUNT,
        U256::from(1_500_000u64),
    );

    let before = workflow.balances(ACCOUNT).await.unwrap();
    assert_eq!(before.buy_token.to_string(), "1.500000");
    assert_eq!(before.mint_token.to_string(), "0.000000000");

    workflow.mint("7".parse().unwrap()).await.unwrap();

    let after = workflow.balances(ACCOUNT).await.unwrap();
    assert_eq!(after.mint_token.to_string(), "0.007000000");
    assert_eq!(after.buy_token.to_string(), "1.500000");
}

#[tokio::test]
async fn failed_transactions_surface_as_errors_and_change_nothing() {
    let (provider, workflow) = fixture();
    let deployment = *workflow.deployment();
    provider.authorize(ACCOUNT);
    provider.set_balance(deployment.mint_token.address, ACCOUNT, U256::from(5u64));
    provider.fail_transactions(true);

    assert!(workflow.approve().await.is_err());
    assert!(!workflow.is_approved(ACCOUNT).await);
    assert!(!workflow.is_submitting());

    assert!(workflow.mint("3".parse().unwrap()).await.is_err());
    let balances = workflow.balances(ACCOUNT).await.unwrap();
    assert_eq!(balances.mint_token.base_units(), U256::from(5u64));
    assert!(provider.sent_transactions().is_empty());
}

/// A provider whose transactions block until released, to observe the
/// submission guard mid-flight.
struct GatedProvider {
    started: Mutex<Option<oneshot::Sender<()>>>,
    release: Notify,
}

#[async_trait]
impl WalletProvider for GatedProvider {
    async fn authorized_accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(vec![ACCOUNT])
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(vec![ACCOUNT])
    }

    async fn call(&self, _to: Address, _data: Bytes) -> Result<Bytes, WalletError> {
        Err(WalletError::Simulated("no reads in this test"))
    }

    async fn send_transaction(&self, _to: Address, _data: Bytes) -> Result<TxHash, WalletError> {
        if let Some(started) = self.started.lock().unwrap().take() {
            let _ = started.send(());
        }
        self.release.notified().await;
        Ok(TxHash::ZERO)
    }
}

#[tokio::test]
async fn submission_guard_is_held_exactly_while_a_transaction_is_outstanding() {
    let (started_tx, started_rx) = oneshot::channel();
    let provider = Arc::new(GatedProvider {
        started: Mutex::new(Some(started_tx)),
        release: Notify::new(),
    });
    let workflow = Arc::new(MintWorkflow::new(provider.clone(), Deployment::TESTNET));

    assert!(!workflow.is_submitting());

    let task = tokio::spawn({
        let workflow = workflow.clone();
        async move { workflow.approve().await }
    });

    started_rx.await.unwrap();
    assert!(workflow.is_submitting());

    // A second submission while one is outstanding is refused and does not
    // disturb the guard.
    let second = workflow.mint("1".parse().unwrap()).await;
    assert!(matches!(second, Err(WalletError::SubmissionPending)));
    assert!(workflow.is_submitting());

    provider.release.notify_one();
    task.await.unwrap().unwrap();
    assert!(!workflow.is_submitting());
}
