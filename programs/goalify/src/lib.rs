use anchor_lang::prelude::*;

declare_id!("5f42e4aYGgFLSVcot3LbHrpyVdmpvAFs6TiWUYENJSut");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

#[program]
pub mod goalify {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        ctx.accounts.initialize_registry(&ctx.bumps)
    }

    pub fn create_goal(
        ctx: Context<CreateGoal>,
        goal_statement: String,
        bet_size: u64,
        duration: i64,
    ) -> Result<u64> {
        ctx.accounts
            .create_goal(goal_statement, bet_size, duration, &ctx.bumps)
    }

    pub fn set_sponsor(ctx: Context<SetSponsor>) -> Result<()> {
        ctx.accounts.set_sponsor()
    }

    pub fn set_judge(ctx: Context<SetJudge>) -> Result<()> {
        ctx.accounts.set_judge()
    }

    pub fn bet(ctx: Context<PlaceBet>, value: u64) -> Result<()> {
        ctx.accounts.bet(value)
    }

    pub fn approve(ctx: Context<Approve>, decision: u8) -> Result<()> {
        ctx.accounts.approve(decision)
    }

    pub fn distribute(ctx: Context<Distribute>) -> Result<()> {
        ctx.accounts.distribute()
    }

    pub fn view_pot(ctx: Context<ViewPot>) -> Result<u64> {
        ctx.accounts.view_pot()
    }
}
