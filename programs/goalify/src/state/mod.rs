pub mod goal;
pub mod registry;

pub use goal::*;
pub use registry::*;
