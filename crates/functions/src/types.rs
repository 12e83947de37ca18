use crate::error::FnError;
use std::collections::HashMap;
use std::sync::Arc;
use stringfn_columns::{IntInput, StrColumn, StrInput};

/// A dynamically-typed batched call argument.
///
/// Each argument carries its own constant-or-column shape; the shape is
/// fixed for the whole call.
#[derive(Debug, Clone, Copy)]
pub enum ArgValue<'a> {
    /// A string argument.
    Str(StrInput<'a>),
    /// A native integer argument.
    Int(IntInput<'a>),
}

impl<'a> ArgValue<'a> {
    /// Human-readable type name, used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgValue::Str(_) => "string",
            ArgValue::Int(_) => "integer",
        }
    }
}

impl<'a> From<StrInput<'a>> for ArgValue<'a> {
    fn from(input: StrInput<'a>) -> Self {
        ArgValue::Str(input)
    }
}

impl<'a> From<IntInput<'a>> for ArgValue<'a> {
    fn from(input: IntInput<'a>) -> Self {
        ArgValue::Int(input)
    }
}

/// Function arity.
#[derive(Debug, Clone, PartialEq)]
pub enum Arity {
    /// Skip the arity check.
    Any,
    /// Exactly `n` arguments.
    Fixed(usize),
    /// Between `min` and `max` arguments. `None` for max = unlimited.
    Range(usize, Option<usize>),
}

/// How a function name is matched during lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
    /// Exact match only.
    Sensitive,
    /// Match regardless of ASCII case.
    Insensitive,
}

/// The type of a function execution routine.
///
/// Receives the validated arguments and the batch row count; returns one
/// output row per input row.
pub type ExecFn = for<'a> fn(&[ArgValue<'a>], usize) -> Result<StrColumn, FnError>;

/// A batched function definition.
pub struct FunctionDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub case: NameCase,
    pub arity: Arity,
    pub exec_fn: ExecFn,
}

/// Registry of function name/alias -> definition.
///
/// Case-insensitive names are additionally indexed by their lowercased
/// form, so lookup stays a pair of hash probes.
#[derive(Default)]
pub struct FunctionMap {
    exact: HashMap<String, Arc<FunctionDefinition>>,
    folded: HashMap<String, Arc<FunctionDefinition>>,
}

impl FunctionMap {
    /// Looks up a definition by name, honoring each definition's case rule.
    pub fn get(&self, name: &str) -> Option<&Arc<FunctionDefinition>> {
        if let Some(def) = self.exact.get(name) {
            return Some(def);
        }
        self.folded.get(&name.to_ascii_lowercase())
    }
}

/// Builds a `FunctionMap` from a list of function definitions.
pub fn functions_to_map(functions: Vec<Arc<FunctionDefinition>>) -> FunctionMap {
    let mut map = FunctionMap::default();
    for def in functions {
        register_name(&mut map, def.name, &def);
        for alias in def.aliases {
            register_name(&mut map, alias, &def);
        }
    }
    map
}

fn register_name(map: &mut FunctionMap, name: &str, def: &Arc<FunctionDefinition>) {
    map.exact.insert(name.to_string(), Arc::clone(def));
    if def.case == NameCase::Insensitive {
        map.folded
            .insert(name.to_ascii_lowercase(), Arc::clone(def));
    }
}

/// Asserts that a call has the correct number of arguments.
pub fn assert_arity(function: &str, arity: &Arity, arg_count: usize) -> Result<(), FnError> {
    match arity {
        Arity::Any => Ok(()),
        Arity::Fixed(n) => {
            if arg_count != *n {
                Err(FnError::Arity(format!(
                    "\"{}\" function expects {} arguments.",
                    function, n
                )))
            } else {
                Ok(())
            }
        }
        Arity::Range(min, max) => {
            if arg_count < *min {
                Err(FnError::Arity(format!(
                    "\"{}\" function expects at least {} arguments.",
                    function, min
                )))
            } else if let Some(max) = max {
                if arg_count > *max {
                    return Err(FnError::Arity(format!(
                        "\"{}\" function expects at most {} arguments.",
                        function, max
                    )));
                }
                Ok(())
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_exec(_args: &[ArgValue<'_>], _rows: usize) -> Result<StrColumn, FnError> {
        Ok(StrColumn::new())
    }

    fn def(name: &'static str, case: NameCase) -> Arc<FunctionDefinition> {
        Arc::new(FunctionDefinition {
            name,
            aliases: &[],
            case,
            arity: Arity::Any,
            exec_fn: noop_exec,
        })
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let map = functions_to_map(vec![def("overlay", NameCase::Insensitive)]);
        assert!(map.get("overlay").is_some());
        assert!(map.get("OVERLAY").is_some());
        assert!(map.get("Overlay").is_some());
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let map = functions_to_map(vec![def("overlayUTF8", NameCase::Sensitive)]);
        assert!(map.get("overlayUTF8").is_some());
        assert!(map.get("overlayutf8").is_none());
        assert!(map.get("OVERLAYUTF8").is_none());
    }

    #[test]
    fn test_arity_range() {
        let arity = Arity::Range(3, Some(4));
        assert!(assert_arity("overlay", &arity, 3).is_ok());
        assert!(assert_arity("overlay", &arity, 4).is_ok());
        assert!(assert_arity("overlay", &arity, 2).is_err());
        assert!(assert_arity("overlay", &arity, 5).is_err());
    }
}
