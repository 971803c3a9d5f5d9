mod app_context;
mod config_warnings;
mod site_root;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;
pub use site_root::find_site_root;
