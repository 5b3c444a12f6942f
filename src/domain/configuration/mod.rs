pub mod loader;
pub mod provision_config;

pub use loader::{CONFIG_FILE, load_config, load_instruction_set, parse_config_content};
pub use provision_config::{MessageTemplates, ProvisionConfig};
