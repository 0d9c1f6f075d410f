use smarteats_config::Config;
use smarteats_iconset_openmoji::FoodIconResolver;

use crate::render::OutputFormat;

pub mod menu;
pub mod resolve;
pub mod showcase;

pub use menu::{MenuArgs, handle_menu};
pub use resolve::{ResolveArgs, handle_resolve};
pub use showcase::handle_showcase;

/// Shared state for one command invocation
pub struct AppContext<'a> {
    pub config: &'a Config,
    pub resolver: &'a FoodIconResolver,
    pub format: OutputFormat,
}
