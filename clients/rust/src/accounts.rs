use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::types::{GoalState, Outcome};

pub const GOAL_REGISTRY_DISCRIMINATOR: [u8; 8] = [178, 43, 61, 220, 155, 90, 147, 35];
pub const GOAL_DISCRIMINATOR: [u8; 8] = [163, 66, 166, 245, 130, 131, 207, 26];

pub const POT_CAP_MULTIPLIER: u64 = 10;

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct GoalRegistry {
    pub discriminator: [u8; 8],
    pub goal_count: u64,
    pub bump: u8,
}

impl GoalRegistry {
    #[inline(always)]
    pub fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
        let account = Self::deserialize(&mut &data[..])?;
        check_discriminator(&account.discriminator, &GOAL_REGISTRY_DISCRIMINATOR)?;
        Ok(account)
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct Goal {
    pub discriminator: [u8; 8],
    pub id: u64,
    pub goal_statement: String,
    pub staker: Pubkey,
    pub sponsor: Option<Pubkey>,
    pub judge: Option<Pubkey>,
    pub bet_size: u64,
    pub duration: i64,
    pub created_at: i64,
    pub pot: u64,
    pub sponsor_bet_balance: u64,
    pub state: GoalState,
    pub outcome: Option<Outcome>,
    pub vault_bump: u8,
    pub bump: u8,
}

impl Goal {
    /// Goal accounts are allocated for the longest statement, so trailing
    /// bytes are expected and ignored.
    #[inline(always)]
    pub fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
        let account = Self::deserialize(&mut &data[..])?;
        check_discriminator(&account.discriminator, &GOAL_DISCRIMINATOR)?;
        Ok(account)
    }

    pub fn pot_cap(&self) -> u64 {
        self.bet_size.saturating_mul(POT_CAP_MULTIPLIER)
    }
}

fn check_discriminator(found: &[u8; 8], expected: &[u8; 8]) -> Result<(), std::io::Error> {
    if found != expected {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "account discriminator mismatch",
        ));
    }
    Ok(())
}
