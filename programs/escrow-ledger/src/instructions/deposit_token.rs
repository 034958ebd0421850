use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, TOKEN_VAULT_SEED};
use crate::derivation::{AddressDeriver, ProgramDeriver};
use crate::errors::LedgerError;
use crate::events::DepositRecorded;
use crate::journal::{Funding, Journal, JournalAccounts};
use crate::ledger::DepositRequest;
use crate::state::{Asset, DepositPage, LedgerState};
use crate::transfer;

/// Moves tokens from the payer's token account into the vault of `mint`.
///
/// The vault must already exist (see `open_token_vault`).
pub fn deposit_token(ctx: Context<DepositToken>, amount: u64) -> Result<()> {
    let deriver = ProgramDeriver::new(*ctx.program_id);
    let accounts = ctx.accounts;

    let mint = accounts.mint.key();
    let vault = accounts.vault.key();
    deriver.verify(
        &[TOKEN_VAULT_SEED, mint.as_ref()],
        &vault,
        LedgerError::InvalidVaultAddress,
    )?;

    let depositor = accounts.payer.key();
    let staged = accounts.ledger.stage_deposit(DepositRequest {
        depositor,
        source: accounts.source.key(),
        destination: vault,
        asset: Asset::Token { mint },
        amount,
    })?;

    let journal = Journal::<DepositPage>::open(
        JournalAccounts {
            ledger_page: accounts.deposit_page.to_account_info(),
            history: accounts.deposit_history.to_account_info(),
            history_page: accounts.deposit_history_page.to_account_info(),
        },
        accounts.ledger.key(),
        depositor,
        staged.index,
        &deriver,
        &Funding {
            payer: accounts.payer.to_account_info(),
            system_program: &accounts.system_program,
        },
    )?;

    transfer::move_tokens(
        &accounts.token_program,
        accounts.source.to_account_info(),
        accounts.vault.to_account_info(),
        accounts.payer.to_account_info(),
        amount,
        &[],
    )?;

    let record = accounts.ledger.append_deposit(staged)?;
    journal.append(record.clone())?;

    msg!("Deposited {} tokens of mint {}", amount, mint);
    msg!("Deposit index: {}", record.index);

    emit!(DepositRecorded::from(&record));
    Ok(())
}

#[derive(Accounts)]
pub struct DepositToken<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_STATE_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,

    pub mint: Account<'info, Mint>,

    /// Payer's token account; the token program checks the payer owns it
    #[account(
        mut,
        constraint = source.mint == mint.key() @ LedgerError::InvalidVaultMint
    )]
    pub source: Account<'info, TokenAccount>,

    /// Matched against the derived vault address of `mint` in the handler
    #[account(
        mut,
        constraint = vault.mint == mint.key() @ LedgerError::InvalidVaultMint
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: ledger-wide page of this deposit's index; address verified and
    /// created on first use by the handler
    #[account(mut)]
    pub deposit_page: UncheckedAccount<'info>,

    /// CHECK: payer's deposit history header; address verified and created
    /// on first use by the handler
    #[account(mut)]
    pub deposit_history: UncheckedAccount<'info>,

    /// CHECK: current page of the payer's deposit history; address verified
    /// and created on first use by the handler
    #[account(mut)]
    pub deposit_history_page: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
