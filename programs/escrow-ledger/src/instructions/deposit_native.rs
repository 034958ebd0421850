use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, NATIVE_VAULT_SEED};
use crate::derivation::{AddressDeriver, ProgramDeriver};
use crate::errors::LedgerError;
use crate::events::DepositRecorded;
use crate::journal::{Funding, Journal, JournalAccounts};
use crate::ledger::DepositRequest;
use crate::state::{Asset, DepositPage, LedgerState};
use crate::transfer;

/// Moves lamports from the payer into the native vault and records the deposit
/// in the ledger and in the payer's own deposit history.
pub fn deposit_native(ctx: Context<DepositNative>, amount: u64) -> Result<()> {
    let deriver = ProgramDeriver::new(*ctx.program_id);
    let accounts = ctx.accounts;

    let vault = accounts.vault.key();
    deriver.verify(&[NATIVE_VAULT_SEED], &vault, LedgerError::InvalidVaultAddress)?;

    let depositor = accounts.payer.key();
    let staged = accounts.ledger.stage_deposit(DepositRequest {
        depositor,
        source: depositor,
        destination: vault,
        asset: Asset::Native,
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

    transfer::move_native(
        &accounts.system_program,
        accounts.payer.to_account_info(),
        accounts.vault.to_account_info(),
        amount,
        &[],
    )?;

    let record = accounts.ledger.append_deposit(staged)?;
    journal.append(record.clone())?;

    msg!("Deposited {} lamports into vault {}", amount, vault);
    msg!("Deposit index: {}", record.index);

    emit!(DepositRecorded::from(&record));
    Ok(())
}

#[derive(Accounts)]
pub struct DepositNative<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_STATE_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,

    /// Matched against the derived native vault address in the handler
    #[account(mut)]
    pub vault: SystemAccount<'info>,

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

    pub system_program: Program<'info, System>,
}
