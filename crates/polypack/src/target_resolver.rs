use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::OnceCell;

use polypack_common::{InjectionStatement, NormalizedInjectOptions};
use polypack_error::{BuildError, BuildResult};

use crate::context::PluginContext;

/// Build-wide resolution of the configured targets.
///
/// Resolution runs at most once per build no matter how many modules race
/// through the transform hook; concurrent first callers share a single
/// attempt. A failed attempt is terminal for the build: later callers get
/// the same diagnostics back without resolution being re-attempted.
#[derive(Debug, Default)]
pub struct TargetResolver {
  resolved: OnceCell<Result<Arc<[InjectionStatement]>, Arc<BuildError>>>,
}

impl TargetResolver {
  pub fn new() -> Self {
    Self { resolved: OnceCell::new() }
  }

  pub async fn resolve_all<C: PluginContext>(
    &self,
    ctx: &C,
    options: &NormalizedInjectOptions,
  ) -> BuildResult<Arc<[InjectionStatement]>> {
    let outcome = self
      .resolved
      .get_or_init(|| async {
        Self::resolve_targets(ctx, options).await.map(Arc::from).map_err(Arc::new)
      })
      .await;

    match outcome {
      Ok(statements) => Ok(Arc::clone(statements)),
      // Replay the cached diagnostics instead of resolving again.
      Err(failure) => Err(failure.iter().map(|error| anyhow!("{error:#}")).collect()),
    }
  }

  async fn resolve_targets<C: PluginContext>(
    ctx: &C,
    options: &NormalizedInjectOptions,
  ) -> Result<Vec<InjectionStatement>, BuildError> {
    let format = ctx.output_format();
    if !format.supports_inject_method(options.method) {
      return Err(
        anyhow!(
          "The \"{}\" injection method cannot be used with the \"{format}\" output format.",
          options.method
        )
        .into(),
      );
    }

    let mut statements = Vec::with_capacity(options.targets.len());
    for target in &options.targets {
      match ctx.resolve(target).await.map_err(BuildError::from)? {
        // External targets keep the raw specifier for the runtime to satisfy.
        Some(resolved) if resolved.is_external => {
          statements.push(InjectionStatement::new(target.clone(), options.method));
        }
        Some(resolved) => {
          statements.push(InjectionStatement::new(resolved.id, options.method));
        }
        None => {
          return Err(
            anyhow!(
              "Could not resolve injected target {target:?}. If you intend to load it at runtime instead of bundling it, mark it as external."
            )
            .into(),
          );
        }
      }
    }

    Ok(statements)
  }
}
