use solana_pubkey::{pubkey, Pubkey};

/// `goalify` program ID.
pub const GOALIFY_ID: Pubkey = pubkey!("5f42e4aYGgFLSVcot3LbHrpyVdmpvAFs6TiWUYENJSut");

pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");
