#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("FrNAQJVQVPMWFn73Gs7qN2mCMMJ9krM3P9Q2tQHU8UaE");

pub mod constants;
pub mod derivation;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod journal;
pub mod ledger;
pub mod state;
pub mod transfer;

pub use errors::LedgerError;
pub use instructions::*;
pub use state::*;

#[program]
pub mod escrow_ledger {
    use super::*;

    /// Create the ledger state with the signer as its only administrator
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Create the vault that custodies tokens of one mint
    pub fn open_token_vault(ctx: Context<OpenTokenVault>) -> Result<()> {
        instructions::open_token_vault(ctx)
    }

    /// Add an administrator. Signer must already be one.
    pub fn add_authorized_address(ctx: Context<AuthorizedAddress>, new_address: Pubkey) -> Result<()> {
        instructions::add_authorized_address(ctx, new_address)
    }

    /// Remove an administrator. Signer must be one; the last one stays.
    pub fn remove_authorized_address(ctx: Context<AuthorizedAddress>, address: Pubkey) -> Result<()> {
        instructions::remove_authorized_address(ctx, address)
    }

    pub fn deposit_native(ctx: Context<DepositNative>, amount: u64) -> Result<()> {
        instructions::deposit_native(ctx, amount)
    }

    pub fn deposit_token(ctx: Context<DepositToken>, amount: u64) -> Result<()> {
        instructions::deposit_token(ctx, amount)
    }

    /// Administrator payout from the native vault
    pub fn withdraw_native(
        ctx: Context<WithdrawNative>,
        amount: u64,
        message: String,
        depositor: Pubkey,
    ) -> Result<()> {
        instructions::withdraw_native(ctx, amount, message, depositor)
    }

    /// Administrator payout from the vault of one mint
    pub fn withdraw_token(
        ctx: Context<WithdrawToken>,
        amount: u64,
        message: String,
        depositor: Pubkey,
    ) -> Result<()> {
        instructions::withdraw_token(ctx, amount, message, depositor)
    }
}
