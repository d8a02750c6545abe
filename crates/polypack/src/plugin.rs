use polypack_common::{InjectOptions, ModuleId, NormalizedInjectOptions, TransformOutput};
use polypack_error::BuildResult;

use crate::classifier::is_eligible_entry;
use crate::context::PluginContext;
use crate::injector::inject;
use crate::target_resolver::TargetResolver;
use crate::utils::normalize_options::normalize_options;

/// Prepends the configured polyfill references to every entry module of
/// the graph, ahead of all of the module's own code.
#[derive(Debug)]
pub struct PolyfillPlugin {
  options: NormalizedInjectOptions,
  resolver: TargetResolver,
}

impl PolyfillPlugin {
  /// Stable name used in host diagnostics attributed to this plugin.
  pub const NAME: &'static str = "polyfill";

  pub fn new(options: InjectOptions) -> BuildResult<Self> {
    Ok(Self { options: normalize_options(options)?, resolver: TargetResolver::new() })
  }

  pub fn name(&self) -> &'static str {
    Self::NAME
  }

  /// Per-module transform hook. `Ok(None)` means the module is not an
  /// eligible entry at this moment and its text is left alone; the host
  /// may offer the same module again after promoting it.
  pub async fn transform<C: PluginContext>(
    &self,
    ctx: &C,
    source: &str,
    id: &ModuleId,
  ) -> BuildResult<Option<TransformOutput>> {
    if self.options.targets.is_empty() {
      return Ok(None);
    }
    if !is_eligible_entry(ctx, id) {
      return Ok(None);
    }

    let statements = self.resolver.resolve_all(ctx, &self.options).await?;
    Ok(Some(inject(source, id, &statements, self.options.source_map)))
  }
}
