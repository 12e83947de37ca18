//! Function definitions.

pub mod overlay;

use crate::types::{functions_to_map, FunctionDefinition, FunctionMap};
use std::sync::Arc;

/// All functions combined.
pub fn all_functions() -> Vec<Arc<FunctionDefinition>> {
    let mut fns = Vec::new();
    fns.extend(overlay::functions());
    fns
}

/// Build the function registry from all functions.
pub fn functions_map() -> FunctionMap {
    functions_to_map(all_functions())
}
