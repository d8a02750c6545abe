mod lines_count;
mod prepend;

pub use crate::lines_count::lines_count;
pub use crate::prepend::prepend_source_map;
pub use oxc_sourcemap::{JSONSourceMap, SourceMap, SourceMapBuilder};
