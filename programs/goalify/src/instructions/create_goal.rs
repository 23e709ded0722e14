use anchor_lang::prelude::*;

use crate::constants::{GOAL_SEED, REGISTRY_SEED, VAULT_SEED};
use crate::events::GoalCreated;
use crate::state::{Goal, GoalRegistry, GoalState};
use crate::utils::{deposit_to_vault, vault_rent_reserve};

#[derive(Accounts)]
pub struct CreateGoal<'info> {
    #[account(mut)]
    pub staker: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, GoalRegistry>,

    #[account(
        init,
        payer = staker,
        space = 8 + Goal::INIT_SPACE,
        seeds = [
            GOAL_SEED,
            registry.key().as_ref(),
            registry.next_goal_id().to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub goal: Account<'info, Goal>,

    #[account(
        mut,
        seeds = [VAULT_SEED, goal.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateGoal<'info> {
    pub fn create_goal(
        &mut self,
        goal_statement: String,
        bet_size: u64,
        duration: i64,
        bumps: &CreateGoalBumps,
    ) -> Result<u64> {
        Goal::validate_terms(&goal_statement, bet_size, duration)?;

        let goal_id = self.registry.next_goal_id();
        let created_at = Clock::get()?.unix_timestamp;

        self.goal.set_inner(Goal {
            id: goal_id,
            goal_statement: goal_statement.clone(),
            staker: self.staker.key(),
            sponsor: None,
            judge: None,
            bet_size,
            duration,
            created_at,
            pot: 0,
            sponsor_bet_balance: 0,
            state: GoalState::Created,
            outcome: None,
            vault_bump: bumps.vault,
            bump: bumps.goal,
        });

        // Vault keeps its rent reserve forever so stakes of any size can land.
        let reserve = vault_rent_reserve()?.saturating_sub(self.vault.lamports());
        if reserve > 0 {
            deposit_to_vault(&self.staker, &self.vault, &self.system_program, reserve)?;
        }

        self.registry.increment_goal_count()?;

        emit!(GoalCreated {
            goal_id,
            staker: self.staker.key(),
            goal_statement,
            bet_size,
            duration,
            created_at,
        });

        Ok(goal_id)
    }
}
