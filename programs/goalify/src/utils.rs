use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::VAULT_SEED;

/// Moves lamports from a signing wallet into a goal vault.
pub fn deposit_to_vault<'info>(
    from: &Signer<'info>,
    vault: &SystemAccount<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = system_program::Transfer {
        from: from.to_account_info(),
        to: vault.to_account_info(),
    };
    let cpi_context = CpiContext::new(system_program.to_account_info(), cpi_accounts);
    system_program::transfer(cpi_context, amount)
}

/// Pays out of a goal vault, signing with the vault PDA seeds.
pub fn release_from_vault<'info>(
    goal: &Pubkey,
    vault: &SystemAccount<'info>,
    vault_bump: u8,
    to: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let vault_seeds = &[VAULT_SEED, goal.as_ref(), &[vault_bump]];
    let vault_signer = &[&vault_seeds[..]];

    let cpi_accounts = system_program::Transfer {
        from: vault.to_account_info(),
        to: to.clone(),
    };
    let cpi_context = CpiContext::new_with_signer(
        system_program.to_account_info(),
        cpi_accounts,
        vault_signer,
    );
    system_program::transfer(cpi_context, amount)
}

/// Lamports a data-less vault must always keep to stay rent exempt.
pub fn vault_rent_reserve() -> Result<u64> {
    Ok(Rent::get()?.minimum_balance(0))
}
