pub mod headless;
pub mod logging;
