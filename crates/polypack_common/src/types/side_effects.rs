#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SideEffects {
  Analyzed(bool),
  /// Never eliminate, regardless of what the global tree-shaking
  /// configuration assumes about module purity.
  NoTreeshake,
}

impl SideEffects {
  pub fn has_side_effects(&self) -> bool {
    match self {
      Self::Analyzed(v) => *v,
      Self::NoTreeshake => true,
    }
  }
}
