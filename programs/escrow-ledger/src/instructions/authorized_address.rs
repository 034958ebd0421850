use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::events::{AdministratorAdded, AdministratorRemoved};
use crate::ledger::SignerIdentity;
use crate::state::LedgerState;

pub fn add_authorized_address(ctx: Context<AuthorizedAddress>, new_address: Pubkey) -> Result<()> {
    let caller = SignerIdentity::from(&ctx.accounts.authority);
    ctx.accounts.ledger.add_administrator(&caller, new_address)?;

    msg!("Administrator added: {}", new_address);
    emit!(AdministratorAdded {
        authority: *caller.key(),
        address: new_address,
    });
    Ok(())
}

pub fn remove_authorized_address(ctx: Context<AuthorizedAddress>, address: Pubkey) -> Result<()> {
    let caller = SignerIdentity::from(&ctx.accounts.authority);
    ctx.accounts.ledger.remove_administrator(&caller, &address)?;

    msg!("Administrator removed: {}", address);
    msg!("Administrators remaining: {}", ctx.accounts.ledger.administrators.len());
    emit!(AdministratorRemoved {
        authority: *caller.key(),
        address,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AuthorizedAddress<'info> {
    /// Must sign; membership in the administrator set is checked by the handler
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_STATE_SEED],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerState>,
}
