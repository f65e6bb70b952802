mod backend;
mod io;
mod model;
mod paths;
mod preference;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use model::SiteConfig;
pub use paths::{ConfigError, VitrinaPaths};
pub use preference::TomlPreferenceStore;
