use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::state::GoalRegistry;

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + GoalRegistry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, GoalRegistry>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeRegistry<'info> {
    pub fn initialize_registry(&mut self, bumps: &InitializeRegistryBumps) -> Result<()> {
        self.registry.set_inner(GoalRegistry {
            goal_count: 0,
            bump: bumps.registry,
        });

        msg!("Goal registry initialized: {}", self.registry.key());

        Ok(())
    }
}
