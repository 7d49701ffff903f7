pub mod difficulty;
pub mod dispatcher;
pub mod interface;
pub mod prompt;

pub use difficulty::*;
pub use dispatcher::*;
pub use interface::*;
pub use prompt::*;
