use anchor_lang::prelude::*;

use crate::constants::{GOAL_SEED, REGISTRY_SEED, VAULT_SEED};
use crate::errors::ErrorCode;
use crate::events::PotDistributed;
use crate::state::{Goal, GoalRegistry};
use crate::utils::release_from_vault;

#[derive(Accounts)]
pub struct Distribute<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [GOAL_SEED, registry.key().as_ref(), goal.id.to_le_bytes().as_ref()],
        bump = goal.bump,
    )]
    pub goal: Account<'info, Goal>,

    #[account(
        mut,
        seeds = [VAULT_SEED, goal.key().as_ref()],
        bump = goal.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub recipient: SystemAccount<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, GoalRegistry>,

    pub system_program: Program<'info, System>,
}

impl<'info> Distribute<'info> {
    pub fn distribute(&mut self) -> Result<()> {
        let recipient = self.goal.payout_recipient()?;
        require_keys_eq!(
            self.recipient.key(),
            recipient,
            ErrorCode::InvalidRecipient
        );

        // Pot is zeroed before any lamports leave the vault.
        let amount = self.goal.take_pot()?;

        if amount > 0 {
            release_from_vault(
                &self.goal.key(),
                &self.vault,
                self.goal.vault_bump,
                &self.recipient.to_account_info(),
                &self.system_program,
                amount,
            )?;
        } else {
            msg!("Goal {} has nothing left to distribute", self.goal.id);
        }

        emit!(PotDistributed {
            goal_id: self.goal.id,
            recipient,
            amount,
        });

        Ok(())
    }
}
