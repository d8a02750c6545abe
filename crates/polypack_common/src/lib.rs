mod inject_options;
mod types;

pub use crate::{
  inject_options::{
    InjectOptions, inject_method::InjectMethod,
    normalized_inject_options::NormalizedInjectOptions, output_format::OutputFormat,
  },
  types::{
    injection_statement::InjectionStatement, module_id::ModuleId, module_info::ModuleInfo,
    resolved_target::ResolvedTarget, side_effects::SideEffects, transform_output::TransformOutput,
  },
};
