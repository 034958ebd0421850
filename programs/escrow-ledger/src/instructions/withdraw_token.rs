use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, TOKEN_VAULT_SEED};
use crate::derivation::{ledger_signer_seeds, AddressDeriver, ProgramDeriver};
use crate::errors::LedgerError;
use crate::events::WithdrawalRecorded;
use crate::journal::{Funding, Journal, JournalAccounts};
use crate::ledger::{SignerIdentity, WithdrawalRequest};
use crate::state::{Asset, LedgerState, WithdrawalPage};
use crate::transfer;

/// Pays `amount` tokens out of the vault of `mint`. The ledger state is the
/// vault's token authority and signs the transfer.
pub fn withdraw_token(
    ctx: Context<WithdrawToken>,
    amount: u64,
    message: String,
    depositor: Pubkey,
) -> Result<()> {
    let deriver = ProgramDeriver::new(*ctx.program_id);
    let accounts = ctx.accounts;

    let mint = accounts.mint.key();
    let vault = accounts.vault.key();
    deriver.verify(
        &[TOKEN_VAULT_SEED, mint.as_ref()],
        &vault,
        LedgerError::InvalidVaultAddress,
    )?;

    let caller = SignerIdentity::from(&accounts.authority);
    let staged = accounts.ledger.stage_withdrawal(
        &caller,
        WithdrawalRequest {
            depositor,
            source: vault,
            destination: accounts.destination.key(),
            asset: Asset::Token { mint },
            amount,
            message,
        },
        accounts.vault.amount,
    )?;

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

    let bump = [accounts.ledger.bump];
    let ledger_seeds: &[&[u8]] = &ledger_signer_seeds(&bump);
    transfer::move_tokens(
        &accounts.token_program,
        accounts.vault.to_account_info(),
        accounts.destination.to_account_info(),
        accounts.ledger.to_account_info(),
        amount,
        &[ledger_seeds],
    )?;

    let record = accounts.ledger.append_withdrawal(staged)?;
    journal.append(record.clone())?;

    msg!("Withdrew {} tokens of mint {} to {}", amount, mint, record.destination);
    msg!("Withdrawal uid: {}", record.uid);

    emit!(WithdrawalRecorded::from(&record));
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawToken<'info> {
    /// Must sign; membership in the administrator set is checked by the handler
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_STATE_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,

    pub mint: Account<'info, Mint>,

    /// Matched against the derived vault address of `mint` in the handler
    #[account(
        mut,
        constraint = vault.mint == mint.key() @ LedgerError::InvalidVaultMint
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == mint.key() @ LedgerError::InvalidVaultMint
    )]
    pub destination: Account<'info, TokenAccount>,

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

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
