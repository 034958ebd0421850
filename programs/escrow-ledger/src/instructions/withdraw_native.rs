use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, NATIVE_VAULT_SEED};
use crate::derivation::{AddressDeriver, ProgramDeriver};
use crate::errors::LedgerError;
use crate::events::WithdrawalRecorded;
use crate::journal::{Funding, Journal, JournalAccounts};
use crate::ledger::{disposable_lamports, SignerIdentity, WithdrawalRequest};
use crate::state::{Asset, LedgerState, WithdrawalPage};
use crate::transfer;

/// Pays `amount` lamports out of the native vault to `destination`.
///
/// `depositor` names whose funds are being released; the withdrawal is
/// mirrored into that depositor's withdrawal history, not the signer's.
/// The vault's rent-exempt reserve is never paid out.
pub fn withdraw_native(
    ctx: Context<WithdrawNative>,
    amount: u64,
    message: String,
    depositor: Pubkey,
) -> Result<()> {
    let deriver = ProgramDeriver::new(*ctx.program_id);
    let accounts = ctx.accounts;

    let vault = accounts.vault.key();
    let vault_bump = deriver.verify(&[NATIVE_VAULT_SEED], &vault, LedgerError::InvalidVaultAddress)?;

    let reserve = Rent::get()?.minimum_balance(0);
    let caller = SignerIdentity::from(&accounts.authority);
    let staged = accounts.ledger.stage_withdrawal(
        &caller,
        WithdrawalRequest {
            depositor,
            source: vault,
            destination: accounts.destination.key(),
            asset: Asset::Native,
            amount,
            message,
        },
        disposable_lamports(accounts.vault.lamports(), reserve),
    )?;

    // the caller is an administrator from here on and pays for new records
    let journal = Journal::<WithdrawalPage>::open(
        JournalAccounts {
            ledger_page: accounts.withdrawal_page.to_account_info(),
            history: accounts.withdrawal_history.to_account_info(),
            history_page: accounts.withdrawal_history_page.to_account_info(),
        },
        accounts.ledger.key(),
        depositor,
        staged.uid,
        &deriver,
        &Funding {
            payer: accounts.authority.to_account_info(),
            system_program: &accounts.system_program,
        },
    )?;

    let vault_seeds: &[&[u8]] = &[NATIVE_VAULT_SEED, &[vault_bump]];
    transfer::move_native(
        &accounts.system_program,
        accounts.vault.to_account_info(),
        accounts.destination.to_account_info(),
        amount,
        &[vault_seeds],
    )?;

    let record = accounts.ledger.append_withdrawal(staged)?;
    journal.append(record.clone())?;

    msg!("Withdrew {} lamports to {}", amount, record.destination);
    msg!("Withdrawal uid: {}", record.uid);

    emit!(WithdrawalRecorded::from(&record));
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawNative<'info> {
    /// Must sign; membership in the administrator set is checked by the handler
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_STATE_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,

    /// Matched against the derived native vault address in the handler
    #[account(mut)]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub destination: SystemAccount<'info>,

    /// CHECK: ledger-wide page of this withdrawal's uid; address verified
    /// and created after authorization by the handler
    #[account(mut)]
    pub withdrawal_page: UncheckedAccount<'info>,

    /// CHECK: depositor's withdrawal history header; address verified and
    /// created after authorization by the handler
    #[account(mut)]
    pub withdrawal_history: UncheckedAccount<'info>,

    /// CHECK: current page of the depositor's withdrawal history; address
    /// verified and created after authorization by the handler
    #[account(mut)]
    pub withdrawal_history_page: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
