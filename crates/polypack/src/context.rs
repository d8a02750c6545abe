use std::future::Future;

use polypack_common::{ModuleId, ModuleInfo, OutputFormat, ResolvedTarget};

/// Capabilities the host pipeline hands to the plugin.
///
/// All graph knowledge stays on the host side. `module_info` must answer
/// with the current state of the graph, not a snapshot from construction
/// time, so entry promotions become visible here. `resolve` may suspend on
/// host I/O; the plugin performs none of its own.
pub trait PluginContext: Send + Sync {
  /// Current view of the module, or `None` if the host has never seen
  /// this id.
  fn module_info(&self, id: &ModuleId) -> Option<ModuleInfo>;

  /// Resolve a target specifier. `Ok(None)` means the specifier maps to
  /// neither a buildable module nor a declared external.
  fn resolve(
    &self,
    specifier: &str,
  ) -> impl Future<Output = anyhow::Result<Option<ResolvedTarget>>> + Send;

  fn output_format(&self) -> OutputFormat;
}
