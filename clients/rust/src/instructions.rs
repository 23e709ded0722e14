use borsh::BorshSerialize;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::pda::{find_registry_pda, find_vault_pda};
use crate::programs::{GOALIFY_ID, SYSTEM_PROGRAM_ID};

pub const INITIALIZE_REGISTRY_DISCRIMINATOR: [u8; 8] = [189, 181, 20, 17, 174, 57, 249, 59];
pub const CREATE_GOAL_DISCRIMINATOR: [u8; 8] = [229, 63, 42, 239, 1, 226, 219, 196];
pub const SET_SPONSOR_DISCRIMINATOR: [u8; 8] = [217, 184, 101, 32, 234, 70, 199, 138];
pub const SET_JUDGE_DISCRIMINATOR: [u8; 8] = [219, 203, 179, 29, 79, 58, 228, 185];
pub const BET_DISCRIMINATOR: [u8; 8] = [94, 203, 166, 126, 20, 243, 169, 82];
pub const APPROVE_DISCRIMINATOR: [u8; 8] = [69, 74, 217, 36, 115, 117, 97, 76];
pub const DISTRIBUTE_DISCRIMINATOR: [u8; 8] = [191, 44, 223, 207, 164, 236, 126, 61];
pub const VIEW_POT_DISCRIMINATOR: [u8; 8] = [106, 184, 152, 17, 69, 143, 108, 0];

#[derive(BorshSerialize)]
struct CreateGoalArgs {
    goal_statement: String,
    bet_size: u64,
    duration: i64,
}

#[derive(BorshSerialize)]
struct BetArgs {
    value: u64,
}

#[derive(BorshSerialize)]
struct ApproveArgs {
    decision: u8,
}

fn instruction_data<T: BorshSerialize>(discriminator: [u8; 8], args: &T) -> Vec<u8> {
    let mut data = discriminator.to_vec();
    args.serialize(&mut data)
        .expect("serializing into a Vec cannot fail");
    data
}

fn registry_or_default(registry: Option<Pubkey>) -> Pubkey {
    registry.unwrap_or_else(|| find_registry_pda().0)
}

/// ### Accounts:
///
///   0. `[writable, signer]` payer
///   1. `[writable]` registry
///   2. `[optional]` system_program (default to `11111111111111111111111111111111`)
#[derive(Clone, Debug, Default)]
pub struct InitializeRegistryBuilder {
    payer: Option<Pubkey>,
    registry: Option<Pubkey>,
}

impl InitializeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn payer(&mut self, payer: Pubkey) -> &mut Self {
        self.payer = Some(payer);
        self
    }

    #[inline(always)]
    pub fn registry(&mut self, registry: Pubkey) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: GOALIFY_ID,
            accounts: vec![
                AccountMeta::new(self.payer.expect("payer is not set"), true),
                AccountMeta::new(registry_or_default(self.registry), false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: INITIALIZE_REGISTRY_DISCRIMINATOR.to_vec(),
        }
    }
}

/// ### Accounts:
///
///   0. `[writable, signer]` staker
///   1. `[writable]` registry
///   2. `[writable]` goal
///   3. `[writable]` vault (derived from goal when unset)
///   4. `[optional]` system_program
#[derive(Clone, Debug, Default)]
pub struct CreateGoalBuilder {
    staker: Option<Pubkey>,
    registry: Option<Pubkey>,
    goal: Option<Pubkey>,
    vault: Option<Pubkey>,
    goal_statement: Option<String>,
    bet_size: Option<u64>,
    duration: Option<i64>,
}

impl CreateGoalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn staker(&mut self, staker: Pubkey) -> &mut Self {
        self.staker = Some(staker);
        self
    }

    #[inline(always)]
    pub fn registry(&mut self, registry: Pubkey) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    #[inline(always)]
    pub fn goal(&mut self, goal: Pubkey) -> &mut Self {
        self.goal = Some(goal);
        self
    }

    #[inline(always)]
    pub fn vault(&mut self, vault: Pubkey) -> &mut Self {
        self.vault = Some(vault);
        self
    }

    #[inline(always)]
    pub fn goal_statement(&mut self, goal_statement: String) -> &mut Self {
        self.goal_statement = Some(goal_statement);
        self
    }

    #[inline(always)]
    pub fn bet_size(&mut self, bet_size: u64) -> &mut Self {
        self.bet_size = Some(bet_size);
        self
    }

    #[inline(always)]
    pub fn duration(&mut self, duration: i64) -> &mut Self {
        self.duration = Some(duration);
        self
    }

    pub fn instruction(&self) -> Instruction {
        let goal = self.goal.expect("goal is not set");
        let vault = self.vault.unwrap_or_else(|| find_vault_pda(&goal).0);
        let args = CreateGoalArgs {
            goal_statement: self
                .goal_statement
                .clone()
                .expect("goal_statement is not set"),
            bet_size: self.bet_size.expect("bet_size is not set"),
            duration: self.duration.expect("duration is not set"),
        };

        Instruction {
            program_id: GOALIFY_ID,
            accounts: vec![
                AccountMeta::new(self.staker.expect("staker is not set"), true),
                AccountMeta::new(registry_or_default(self.registry), false),
                AccountMeta::new(goal, false),
                AccountMeta::new(vault, false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: instruction_data(CREATE_GOAL_DISCRIMINATOR, &args),
        }
    }
}

/// Shared shape of `set_sponsor` and `set_judge`.
///
/// ### Accounts:
///
///   0. `[signer]` member (sponsor or judge)
///   1. `[writable]` goal
///   2. `[]` registry
#[derive(Clone, Debug, Default)]
pub struct OnboardBuilder {
    member: Option<Pubkey>,
    goal: Option<Pubkey>,
    registry: Option<Pubkey>,
}

impl OnboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn member(&mut self, member: Pubkey) -> &mut Self {
        self.member = Some(member);
        self
    }

    #[inline(always)]
    pub fn goal(&mut self, goal: Pubkey) -> &mut Self {
        self.goal = Some(goal);
        self
    }

    #[inline(always)]
    pub fn registry(&mut self, registry: Pubkey) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    pub fn set_sponsor_instruction(&self) -> Instruction {
        self.instruction(SET_SPONSOR_DISCRIMINATOR)
    }

    pub fn set_judge_instruction(&self) -> Instruction {
        self.instruction(SET_JUDGE_DISCRIMINATOR)
    }

    fn instruction(&self, discriminator: [u8; 8]) -> Instruction {
        Instruction {
            program_id: GOALIFY_ID,
            accounts: vec![
                AccountMeta::new_readonly(self.member.expect("member is not set"), true),
                AccountMeta::new(self.goal.expect("goal is not set"), false),
                AccountMeta::new_readonly(registry_or_default(self.registry), false),
            ],
            data: discriminator.to_vec(),
        }
    }
}

/// ### Accounts:
///
///   0. `[writable, signer]` bettor
///   1. `[writable]` goal
///   2. `[writable]` vault (derived from goal when unset)
///   3. `[]` registry
///   4. `[optional]` system_program
#[derive(Clone, Debug, Default)]
pub struct BetBuilder {
    bettor: Option<Pubkey>,
    goal: Option<Pubkey>,
    vault: Option<Pubkey>,
    registry: Option<Pubkey>,
    value: Option<u64>,
}

impl BetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn bettor(&mut self, bettor: Pubkey) -> &mut Self {
        self.bettor = Some(bettor);
        self
    }

    #[inline(always)]
    pub fn goal(&mut self, goal: Pubkey) -> &mut Self {
        self.goal = Some(goal);
        self
    }

    #[inline(always)]
    pub fn vault(&mut self, vault: Pubkey) -> &mut Self {
        self.vault = Some(vault);
        self
    }

    #[inline(always)]
    pub fn registry(&mut self, registry: Pubkey) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    #[inline(always)]
    pub fn value(&mut self, value: u64) -> &mut Self {
        self.value = Some(value);
        self
    }

    pub fn instruction(&self) -> Instruction {
        let goal = self.goal.expect("goal is not set");
        let vault = self.vault.unwrap_or_else(|| find_vault_pda(&goal).0);
        let args = BetArgs {
            value: self.value.expect("value is not set"),
        };

        Instruction {
            program_id: GOALIFY_ID,
            accounts: vec![
                AccountMeta::new(self.bettor.expect("bettor is not set"), true),
                AccountMeta::new(goal, false),
                AccountMeta::new(vault, false),
                AccountMeta::new_readonly(registry_or_default(self.registry), false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: instruction_data(BET_DISCRIMINATOR, &args),
        }
    }
}

/// ### Accounts:
///
///   0. `[signer]` judge
///   1. `[writable]` goal
///   2. `[]` registry
#[derive(Clone, Debug, Default)]
pub struct ApproveBuilder {
    judge: Option<Pubkey>,
    goal: Option<Pubkey>,
    registry: Option<Pubkey>,
    decision: Option<u8>,
}

impl ApproveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn judge(&mut self, judge: Pubkey) -> &mut Self {
        self.judge = Some(judge);
        self
    }

    #[inline(always)]
    pub fn goal(&mut self, goal: Pubkey) -> &mut Self {
        self.goal = Some(goal);
        self
    }

    #[inline(always)]
    pub fn registry(&mut self, registry: Pubkey) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    /// Raw verdict byte; see [`crate::Decision`] for the accepted values.
    #[inline(always)]
    pub fn decision(&mut self, decision: u8) -> &mut Self {
        self.decision = Some(decision);
        self
    }

    pub fn instruction(&self) -> Instruction {
        let args = ApproveArgs {
            decision: self.decision.expect("decision is not set"),
        };

        Instruction {
            program_id: GOALIFY_ID,
            accounts: vec![
                AccountMeta::new_readonly(self.judge.expect("judge is not set"), true),
                AccountMeta::new(self.goal.expect("goal is not set"), false),
                AccountMeta::new_readonly(registry_or_default(self.registry), false),
            ],
            data: instruction_data(APPROVE_DISCRIMINATOR, &args),
        }
    }
}

/// ### Accounts:
///
///   0. `[signer]` caller
///   1. `[writable]` goal
///   2. `[writable]` vault (derived from goal when unset)
///   3. `[writable]` recipient
///   4. `[]` registry
///   5. `[optional]` system_program
#[derive(Clone, Debug, Default)]
pub struct DistributeBuilder {
    caller: Option<Pubkey>,
    goal: Option<Pubkey>,
    vault: Option<Pubkey>,
    recipient: Option<Pubkey>,
    registry: Option<Pubkey>,
}

impl DistributeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn caller(&mut self, caller: Pubkey) -> &mut Self {
        self.caller = Some(caller);
        self
    }

    #[inline(always)]
    pub fn goal(&mut self, goal: Pubkey) -> &mut Self {
        self.goal = Some(goal);
        self
    }

    #[inline(always)]
    pub fn vault(&mut self, vault: Pubkey) -> &mut Self {
        self.vault = Some(vault);
        self
    }

    #[inline(always)]
    pub fn recipient(&mut self, recipient: Pubkey) -> &mut Self {
        self.recipient = Some(recipient);
        self
    }

    #[inline(always)]
    pub fn registry(&mut self, registry: Pubkey) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    pub fn instruction(&self) -> Instruction {
        let goal = self.goal.expect("goal is not set");
        let vault = self.vault.unwrap_or_else(|| find_vault_pda(&goal).0);

        Instruction {
            program_id: GOALIFY_ID,
            accounts: vec![
                AccountMeta::new_readonly(self.caller.expect("caller is not set"), true),
                AccountMeta::new(goal, false),
                AccountMeta::new(vault, false),
                AccountMeta::new(self.recipient.expect("recipient is not set"), false),
                AccountMeta::new_readonly(registry_or_default(self.registry), false),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ],
            data: DISTRIBUTE_DISCRIMINATOR.to_vec(),
        }
    }
}

/// ### Accounts:
///
///   0. `[]` goal
#[derive(Clone, Debug, Default)]
pub struct ViewPotBuilder {
    goal: Option<Pubkey>,
}

impl ViewPotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn goal(&mut self, goal: Pubkey) -> &mut Self {
        self.goal = Some(goal);
        self
    }

    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: GOALIFY_ID,
            accounts: vec![AccountMeta::new_readonly(
                self.goal.expect("goal is not set"),
                false,
            )],
            data: VIEW_POT_DISCRIMINATOR.to_vec(),
        }
    }
}
