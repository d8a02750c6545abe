use arcstr::ArcStr;
use polypack_utils::indexmap::FxIndexSet;

use crate::ModuleId;

/// Host-owned view of one module in the graph.
///
/// `is_entry` is not settled at graph construction time: the host may
/// promote a module to an entry point while the build is running (an
/// emitted chunk, a preloaded module). Consumers must re-query rather than
/// hold on to an old snapshot.
#[derive(Debug, Clone)]
pub struct ModuleInfo {
  pub id: ModuleId,
  pub is_entry: bool,
  pub is_external: bool,
  pub code: Option<ArcStr>,
  pub importers: FxIndexSet<ModuleId>,
  pub dynamic_importers: FxIndexSet<ModuleId>,
}

impl ModuleInfo {
  pub fn new(id: ModuleId) -> Self {
    Self {
      id,
      is_entry: false,
      is_external: false,
      code: None,
      importers: FxIndexSet::default(),
      dynamic_importers: FxIndexSet::default(),
    }
  }
}
