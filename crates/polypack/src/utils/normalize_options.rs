use arcstr::ArcStr;

use polypack_common::{InjectMethod, InjectOptions, NormalizedInjectOptions};
use polypack_error::BuildResult;

/// Applies defaults and validates the raw configuration. Runs before any
/// module is transformed, so a bad `method` value fails the build up front.
pub fn normalize_options(raw_options: InjectOptions) -> BuildResult<NormalizedInjectOptions> {
  let method = match &raw_options.method {
    Some(raw) => raw.parse::<InjectMethod>()?,
    None => InjectMethod::default(),
  };

  Ok(NormalizedInjectOptions {
    targets: raw_options.targets.into_iter().map(ArcStr::from).collect(),
    source_map: raw_options.source_map.unwrap_or(true),
    method,
  })
}
