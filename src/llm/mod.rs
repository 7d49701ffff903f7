pub mod claude_llm;
pub mod completion_interface;
pub mod error;
pub mod openai_compatible_llm;
pub mod provider_factory;

pub use claude_llm::*;
pub use completion_interface::*;
pub use error::*;
pub use openai_compatible_llm::*;
pub use provider_factory::*;

/// Join a base URL and a path without doubling the slash
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') {
        format!("{}{}", base_url, path)
    } else {
        format!("{}/{}", base_url, path)
    }
}
