pub mod injection_statement;
pub mod module_id;
pub mod module_info;
pub mod resolved_target;
pub mod side_effects;
pub mod transform_output;
