//! Vault balance reader for pool reserve snapshots

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use spl_token::state::Account as TokenAccount;

use crate::domain::market::{AmmMarket, ReserveSnapshot, Side};
use crate::shared::errors::FetchError;

/// Reserve-fetch boundary. The core never reads the chain itself; it is
/// handed fresh snapshots through this trait before every decision.
#[async_trait]
pub trait ReserveFetcher: Send + Sync {
    /// Read both vault balances of a pool, oriented for the buy side
    /// (input reserve = token B vault, output reserve = token A vault).
    async fn fetch_buy_side(&self, market: &AmmMarket) -> Result<ReserveSnapshot, FetchError>;
}

/// RPC-backed fetcher reading SPL token vault accounts.
pub struct RpcReserveFetcher {
    rpc_client: RpcClient,
}

impl RpcReserveFetcher {
    pub fn new(rpc_url: String) -> Self {
        Self {
            rpc_client: RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed()),
        }
    }
}

#[async_trait]
impl ReserveFetcher for RpcReserveFetcher {
    async fn fetch_buy_side(&self, market: &AmmMarket) -> Result<ReserveSnapshot, FetchError> {
        let input_vault = market.input_vault(Side::Buy);
        let output_vault = market.output_vault(Side::Buy);

        let accounts = self
            .rpc_client
            .get_multiple_accounts(&[input_vault, output_vault])
            .await
            .map_err(|e| FetchError::Rpc(e.to_string()))?;

        match accounts.as_slice() {
            [input_account, output_account] => Ok(ReserveSnapshot::new(
                unpack_vault_amount(input_account, input_vault)?,
                unpack_vault_amount(output_account, output_vault)?,
            )),
            _ => Err(FetchError::Rpc(format!(
                "expected 2 accounts, got {}",
                accounts.len()
            ))),
        }
    }
}

fn unpack_vault_amount(account: &Option<Account>, vault: Pubkey) -> Result<u64, FetchError> {
    let account = account.as_ref().ok_or(FetchError::AccountMissing(vault))?;
    let token_account = TokenAccount::unpack(&account.data)
        .map_err(|_| FetchError::InvalidAccountData(vault))?;
    Ok(token_account.amount)
}
