mod errors;
mod globals;
mod store;

pub use errors::ConfigError;
pub use globals::{DEFAULT_ENTRY_WIDTH, DEFAULT_TOOLTIP, Globals};
pub use store::ConfigStore;
