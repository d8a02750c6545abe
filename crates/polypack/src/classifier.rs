use polypack_common::ModuleId;

use crate::context::PluginContext;

/// Whether a module should receive injected statements right now.
///
/// Entry status can flip while the build runs (a module emitted as its own
/// chunk, or preloaded before being wired up), so this re-queries the host
/// on every call and never caches a negative answer. External modules are
/// declined here without error; refusing to build an external entry is the
/// host's diagnostic and passes through untouched.
pub fn is_eligible_entry<C: PluginContext>(ctx: &C, id: &ModuleId) -> bool {
  ctx.module_info(id).is_some_and(|info| info.is_entry && !info.is_external)
}
