use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, NATIVE_VAULT_SEED};
use crate::derivation::{AddressDeriver, ProgramDeriver};
use crate::errors::LedgerError;
use crate::events::LedgerInitialized;
use crate::ledger::{reserve_shortfall, SignerIdentity};
use crate::state::LedgerState;
use crate::transfer;

/// Creates the ledger with the signer as its first administrator, and funds
/// the native vault up to its rent-exempt reserve at the signer's expense.
///
/// The state account uses `init_if_needed` so that a repeated call reaches
/// the handler and fails with `AlreadyInitialized` instead of a generic
/// "account in use" error. The handler never resets a populated ledger.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let deriver = ProgramDeriver::new(*ctx.program_id);
    let ledger_bump = ctx.bumps.ledger;
    let accounts = ctx.accounts;

    require!(
        !accounts.ledger.is_initialized(),
        LedgerError::AlreadyInitialized
    );

    let vault = accounts.vault.key();
    let vault_bump = deriver.verify(&[NATIVE_VAULT_SEED], &vault, LedgerError::InvalidVaultAddress)?;

    let founder = SignerIdentity::from(&accounts.signer);
    accounts.ledger.open(&founder, vault, ledger_bump, vault_bump)?;

    let reserve = Rent::get()?.minimum_balance(0);
    let shortfall = reserve_shortfall(accounts.vault.lamports(), reserve);
    if shortfall > 0 {
        transfer::move_native(
            &accounts.system_program,
            accounts.signer.to_account_info(),
            accounts.vault.to_account_info(),
            shortfall,
            &[],
        )?;
    }

    msg!("Ledger initialized by: {}", founder.key());
    msg!("Native vault: {} (reserve {} lamports)", vault, reserve);

    emit!(LedgerInitialized {
        ledger: accounts.ledger.key(),
        administrator: *founder.key(),
        vault,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        space = LedgerState::LEN,
        seeds = [LEDGER_STATE_SEED],
        bump
    )]
    pub ledger: Account<'info, LedgerState>,

    /// Native vault; holds lamports only and is matched against its derived
    /// address in the handler.
    #[account(mut)]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
