mod classifier;
mod context;
mod injector;
mod plugin;
mod target_resolver;
mod utils;

pub use crate::classifier::is_eligible_entry;
pub use crate::context::PluginContext;
pub use crate::injector::inject;
pub use crate::plugin::PolyfillPlugin;
pub use crate::target_resolver::TargetResolver;
pub use polypack_common::*;
