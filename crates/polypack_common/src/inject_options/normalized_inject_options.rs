use arcstr::ArcStr;

use crate::InjectMethod;

/// `InjectOptions` after defaulting and validation. Fixed for the lifetime
/// of one build invocation.
#[derive(Debug)]
pub struct NormalizedInjectOptions {
  pub targets: Vec<ArcStr>,
  pub source_map: bool,
  pub method: InjectMethod,
}
