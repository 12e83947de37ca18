//! Batched string functions over packed columns.
//!
//! # Overview
//!
//! Functions operate on batches of rows at once. Each argument is supplied
//! either as a constant shared by every row or as a per-row column, and the
//! result is one packed [`StrColumn`] with one output row per input row.
//!
//! # Example
//!
//! ```
//! use stringfn::{call, functions_map, ArgValue};
//! use stringfn_columns::{IntInput, StrInput};
//!
//! let functions = functions_map();
//! let args = [
//!     ArgValue::Str(StrInput::from("Hello World")),
//!     ArgValue::Str(StrInput::from("App")),
//!     ArgValue::Int(IntInput::from(6)),
//! ];
//! let out = call("overlay", &args, 1, &functions).unwrap();
//!
//! assert_eq!(out.value(0), b"HelloApprld");
//! ```

pub mod call;
pub mod error;
pub mod functions;
pub mod types;
pub mod utf8;

// Re-export the core public API
pub use call::call;
pub use error::FnError;
pub use functions::functions_map;
pub use functions::overlay::{execute, resolve_offset, AddressUnit};
pub use stringfn_columns::StrColumn;
pub use types::{ArgValue, Arity, FunctionDefinition, FunctionMap, NameCase};
