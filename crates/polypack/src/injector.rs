use itertools::Itertools;

use polypack_common::{InjectionStatement, ModuleId, SideEffects, TransformOutput};
use polypack_sourcemap::prepend_source_map;

/// Prepends the rendered statements to `source`, one per line in the given
/// order, followed by exactly one blank line. `source` is carried over
/// byte-for-byte, so the module's export surface is untouched and every
/// original position shifts down by a fixed number of lines.
pub fn inject(
  source: &str,
  id: &ModuleId,
  statements: &[InjectionStatement],
  source_map: bool,
) -> TransformOutput {
  debug_assert!(!statements.is_empty());

  let block = statements.iter().map(InjectionStatement::render).join("\n");

  let mut code = String::with_capacity(block.len() + 2 + source.len());
  code.push_str(&block);
  code.push_str("\n\n");
  code.push_str(source);

  // One line per statement plus the blank separator.
  let injected_lines = u32::try_from(statements.len()).unwrap() + 1;
  let map = source_map.then(|| prepend_source_map(id.as_ref(), source, injected_lines));

  TransformOutput { code, map, side_effects: SideEffects::NoTreeshake }
}

#[test]
fn test() {
  use polypack_common::InjectMethod;

  let id = ModuleId::from("/main.js");
  let statements = [
    InjectionStatement::new("a", InjectMethod::Import),
    InjectionStatement::new("b", InjectMethod::Import),
  ];

  let output = inject("const x = 1;\nexport default x;", &id, &statements, true);
  assert_eq!(output.code, "import \"a\";\nimport \"b\";\n\nconst x = 1;\nexport default x;");
  assert!(output.side_effects.has_side_effects());

  let map = output.map.unwrap();
  let first = map.get_tokens().next().unwrap();
  // Original first line lands after the two statements and the blank line.
  assert_eq!(first.get_dst_line(), 3);
  assert_eq!(first.get_src_line(), 0);
  assert_eq!(first.get_src_col(), 0);

  let output = inject("const x = 1;", &id, &statements[..1], false);
  assert_eq!(output.code, "import \"a\";\n\nconst x = 1;");
  assert!(output.map.is_none());
}
