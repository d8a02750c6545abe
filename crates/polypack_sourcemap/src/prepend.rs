use oxc_sourcemap::{SourceMap, SourceMapBuilder};

use crate::lines_count::lines_count;

/// Builds the position map for a source that had `offset_lines` synthetic
/// lines prepended to it.
///
/// The mapping is line-granular at column 0: original line `L` maps to
/// output line `L + offset_lines`. The synthetic lines themselves carry no
/// tokens, so debuggers resolve them to nothing instead of a wrong origin.
pub fn prepend_source_map(source_name: &str, source: &str, offset_lines: u32) -> SourceMap {
  let mut builder = SourceMapBuilder::default();
  let source_id = builder.add_source_and_content(source_name, source);
  for line in 0..=lines_count(source) {
    builder.add_token(line + offset_lines, 0, line, 0, Some(source_id), None);
  }
  builder.into_sourcemap()
}

#[test]
fn test() {
  let map = prepend_source_map("/main.js", "a;\nb;\nc;", 2);
  let tokens = map.get_tokens().collect::<Vec<_>>();
  assert_eq!(tokens.len(), 3);
  assert_eq!(tokens[0].get_dst_line(), 2);
  assert_eq!(tokens[0].get_src_line(), 0);
  assert_eq!(tokens[2].get_dst_line(), 4);
  assert_eq!(tokens[2].get_src_line(), 2);
  // Mapped order follows original order.
  assert!(tokens.windows(2).all(|pair| pair[0].get_dst_line() < pair[1].get_dst_line()));
}
