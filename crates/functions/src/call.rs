//! The `call` entry point: name lookup, arity check, dispatch.

use crate::error::FnError;
use crate::types::{assert_arity, ArgValue, FunctionMap};
use stringfn_columns::StrColumn;

/// Executes a batched function call against a function registry.
///
/// Resolves `name` through the registry (honoring each definition's
/// case-matching rule), checks the argument count, then hands the arguments
/// to the function's execution routine. Each function validates its own
/// argument types before touching row data.
pub fn call(
    name: &str,
    args: &[ArgValue<'_>],
    rows: usize,
    functions: &FunctionMap,
) -> Result<StrColumn, FnError> {
    let def = functions
        .get(name)
        .cloned()
        .ok_or_else(|| FnError::UnknownFunction(name.to_string()))?;

    assert_arity(def.name, &def.arity, args.len())?;

    (def.exec_fn)(args, rows)
}
