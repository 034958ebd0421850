use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, TOKEN_VAULT_SEED};
use crate::events::TokenVaultOpened;
use crate::state::LedgerState;

/// Creates the vault for `mint`. Anyone may pay for it; only the ledger
/// state can move tokens out of it.
pub fn open_token_vault(ctx: Context<OpenTokenVault>) -> Result<()> {
    let mint = ctx.accounts.mint.key();
    let vault = ctx.accounts.vault.key();

    msg!("Token vault opened for mint: {}", mint);
    msg!("Vault address: {}", vault);

    emit!(TokenVaultOpened { mint, vault });
    Ok(())
}

#[derive(Accounts)]
pub struct OpenTokenVault<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [LEDGER_STATE_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,

    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        seeds = [TOKEN_VAULT_SEED, mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = ledger,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
