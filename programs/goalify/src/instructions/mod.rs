pub mod approve;
pub mod bet;
pub mod create_goal;
pub mod distribute;
pub mod initialize_registry;
pub mod set_judge;
pub mod set_sponsor;
pub mod view_pot;

pub use approve::*;
pub use bet::*;
pub use create_goal::*;
pub use distribute::*;
pub use initialize_registry::*;
pub use set_judge::*;
pub use set_sponsor::*;
pub use view_pot::*;
