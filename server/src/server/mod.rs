mod local_authority;
mod server_config;

pub use local_authority::LocalAuthority;
pub use server_config::{PushCondition, ServerConfig};
