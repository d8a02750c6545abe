pub mod inject_method;
pub mod normalized_inject_options;
pub mod output_format;

/// Raw, caller-supplied configuration for the injection step.
#[derive(Default, Debug, Clone)]
pub struct InjectOptions {
  /// Ordered list of files or module names to prepend to every entry
  /// module. The first target's code runs first. Empty means the whole
  /// step is a no-op.
  pub targets: Vec<String>,
  /// Whether to compute a position map for the transformed text.
  /// Defaults to `true`.
  pub source_map: Option<bool>,
  /// Statement rendering style, `"import"` or `"require"`. Defaults to
  /// `"import"`.
  pub method: Option<String>,
}
