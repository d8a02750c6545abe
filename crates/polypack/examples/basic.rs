use std::collections::HashMap;
use std::io::Write;

use polypack::{
  InjectOptions, ModuleId, ModuleInfo, OutputFormat, PluginContext, PolyfillPlugin, ResolvedTarget,
};

struct InMemoryContext {
  entries: Vec<String>,
  resolutions: HashMap<String, ResolvedTarget>,
}

impl PluginContext for InMemoryContext {
  fn module_info(&self, id: &ModuleId) -> Option<ModuleInfo> {
    let mut info = ModuleInfo::new(id.clone());
    info.is_entry = self.entries.iter().any(|entry| entry == id.as_ref());
    Some(info)
  }

  async fn resolve(&self, specifier: &str) -> anyhow::Result<Option<ResolvedTarget>> {
    Ok(self.resolutions.get(specifier).cloned())
  }

  fn output_format(&self) -> OutputFormat {
    OutputFormat::Esm
  }
}

#[tokio::main]
async fn main() {
  let ctx = InMemoryContext {
    entries: vec!["/src/main.js".to_string()],
    resolutions: HashMap::from([(
      "core-js".to_string(),
      ResolvedTarget { id: "/node_modules/core-js/index.js".into(), is_external: false },
    )]),
  };

  let plugin = PolyfillPlugin::new(InjectOptions {
    targets: vec!["core-js".to_string()],
    ..InjectOptions::default()
  })
  .unwrap();

  let output = plugin
    .transform(&ctx, "export const answer = 42;\n", &ModuleId::from("/src/main.js"))
    .await
    .unwrap()
    .unwrap();

  let _ = std::io::stdout().write_all(output.code.as_bytes());
}
