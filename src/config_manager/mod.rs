pub mod llm;
pub mod main;
pub mod system;
pub mod translation;
pub mod utils;

pub use llm::*;
pub use main::*;
pub use system::*;
pub use translation::*;
