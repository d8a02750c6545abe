use arcstr::ArcStr;

/// Outcome of asking the host to resolve one injection target.
///
/// `is_external` means the specifier is deliberately left for the runtime
/// to satisfy; the injected statement then references the raw specifier
/// instead of a bundled path.
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
  pub id: ArcStr,
  pub is_external: bool,
}
