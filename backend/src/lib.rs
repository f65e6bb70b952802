mod boot;
mod infrastructure;
mod site;

pub use boot::{BootError, load_content, parse_content};
pub use infrastructure::headless::{HeadlessLayout, HeadlessSurface};
pub use infrastructure::logging;
pub use site::{Settings, Site, SurfaceProvider};
