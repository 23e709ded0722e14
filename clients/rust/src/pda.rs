use solana_pubkey::Pubkey;

use crate::programs::GOALIFY_ID;

pub const REGISTRY_SEED: &[u8] = b"goalify_registry";
pub const GOAL_SEED: &[u8] = b"goal";
pub const VAULT_SEED: &[u8] = b"goal_vault";

pub fn find_registry_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_SEED], &GOALIFY_ID)
}

pub fn find_goal_pda(registry: &Pubkey, goal_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[GOAL_SEED, registry.as_ref(), &goal_id.to_le_bytes()],
        &GOALIFY_ID,
    )
}

pub fn find_vault_pda(goal: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, goal.as_ref()], &GOALIFY_ID)
}
