use polypack_sourcemap::SourceMap;

use crate::SideEffects;

/// Result of one successful injection pass over an entry module.
#[derive(Debug)]
pub struct TransformOutput {
  pub code: String,
  pub map: Option<SourceMap>,
  /// The injected statements exist only for their side effects; the host's
  /// tree-shaker must treat this module as effectful or it would strip
  /// them as unused.
  pub side_effects: SideEffects,
}
