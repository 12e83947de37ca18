//! The `overlay` / `overlayUTF8` batched functions.
//!
//! `overlay(input, replace, offset[, length])` replaces a region of `input`
//! with `replace`, starting at the 1-based (possibly negative) `offset`. By
//! default the removed region is as long as `replace`; the optional `length`
//! removes a different amount. `overlay` measures in bytes, `overlayUTF8`
//! in code points.

use std::sync::Arc;

use crate::error::FnError;
use crate::types::{ArgValue, Arity, FunctionDefinition, NameCase};
use crate::utf8;
use stringfn_columns::{IntInput, StrColumn, StrInput};

/// Whether offsets and lengths are measured in bytes or in code points.
///
/// Fixed per call; every size, start, and removal count within one call is
/// measured in the same unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressUnit {
    Bytes,
    CodePoints,
}

/// Converts a 1-based, possibly negative offset into a zero-based position
/// clamped to `[0, size]`.
///
/// Positive offsets count from the start (`1` is the first unit); zero and
/// negative offsets count back from the end. Out-of-range values clamp to
/// the nearest end; no value is an error.
pub fn resolve_offset(offset: i64, size: usize) -> usize {
    if offset > 0 {
        let zero_based = (offset - 1) as usize;
        if zero_based > size {
            size
        } else {
            zero_based
        }
    } else {
        let back = offset.unsigned_abs() as usize;
        if size < back {
            0
        } else {
            size - back
        }
    }
}

/// Size of a byte range in the given unit.
pub fn slice_size(bytes: &[u8], unit: AddressUnit) -> usize {
    match unit {
        AddressUnit::Bytes => bytes.len(),
        AddressUnit::CodePoints => utf8::count_code_points(bytes),
    }
}

/// Byte positions `(prefix_end, suffix_start)` delimiting the replaced
/// region of `subject`.
///
/// `subject_size`, `start`, and `remove` are measured in `unit`, with
/// `start <= subject_size`. The prefix covers `start` units from the
/// beginning; the suffix covers `subject_size - start - remove` units from
/// the end, or nothing when the removal reaches past the end. Neither
/// position ever leaves `[0, subject.len()]`, even for malformed UTF-8.
pub fn splice_bounds(
    subject: &[u8],
    subject_size: usize,
    start: usize,
    remove: usize,
    unit: AddressUnit,
) -> (usize, usize) {
    let removal_end = start.saturating_add(remove);
    match unit {
        AddressUnit::Bytes => {
            let prefix_end = start.min(subject.len());
            let suffix_start = removal_end.min(subject.len());
            (prefix_end, suffix_start)
        }
        AddressUnit::CodePoints => {
            let suffix_units = if removal_end > subject_size {
                0
            } else {
                subject_size - removal_end
            };
            let prefix_end = utf8::skip_code_points_forward(subject, start);
            let suffix_start = utf8::skip_code_points_backward(subject, suffix_units);
            (prefix_end, suffix_start.max(prefix_end))
        }
    }
}

/// Appends one spliced row to `dst`: the prefix of `subject`, the whole
/// `replacement`, then the suffix of `subject`.
pub fn splice_into(
    dst: &mut StrColumn,
    subject: &[u8],
    subject_size: usize,
    replacement: &[u8],
    start: usize,
    remove: usize,
    unit: AddressUnit,
) {
    let (prefix_end, suffix_start) = splice_bounds(subject, subject_size, start, remove, unit);
    dst.append_segment(&subject[..prefix_end]);
    dst.append_segment(replacement);
    dst.append_segment(&subject[suffix_start..]);
    dst.commit_row();
}

/// Runs the overlay over a whole batch.
///
/// Each argument's constant-or-column shape is resolved once; one generic
/// row loop then queries each source per row, so every shape combination
/// takes the same code path. Sizes of constant arguments are measured once
/// up front. An explicit non-negative `length` removes that many units; an
/// absent or negative one defaults to the replacement's size.
pub fn execute(
    rows: usize,
    subject: StrInput<'_>,
    replacement: StrInput<'_>,
    offset: IntInput<'_>,
    length: Option<IntInput<'_>>,
    unit: AddressUnit,
) -> StrColumn {
    if rows == 0 {
        return StrColumn::new();
    }

    let mut out = match subject {
        StrInput::Constant(bytes) => StrColumn::with_byte_capacity(bytes.len() * rows),
        StrInput::Column(col) => StrColumn::with_byte_capacity(col.char_bytes()),
    };
    out.reserve_rows(rows);

    let const_subject_size = subject.as_constant().map(|b| slice_size(b, unit));
    let const_replace_size = replacement.as_constant().map(|b| slice_size(b, unit));

    for i in 0..rows {
        let subj = subject.at(i);
        let repl = replacement.at(i);
        let subject_size = match const_subject_size {
            Some(size) => size,
            None => slice_size(subj, unit),
        };
        let replace_size = match const_replace_size {
            Some(size) => size,
            None => slice_size(repl, unit),
        };

        let start = resolve_offset(offset.at(i), subject_size);
        let remove = match length {
            None => replace_size,
            Some(len) => {
                let value = len.at(i);
                if value >= 0 {
                    value as usize
                } else {
                    replace_size
                }
            }
        };

        splice_into(&mut out, subj, subject_size, repl, start, remove, unit);
    }
    out
}

fn expect_str<'a>(
    name: &str,
    arg_name: &str,
    value: Option<&ArgValue<'a>>,
) -> Result<StrInput<'a>, FnError> {
    match value {
        Some(ArgValue::Str(input)) => Ok(*input),
        Some(other) => Err(FnError::Type(format!(
            "\"{}\" function expects {} to be a string, got {}.",
            name,
            arg_name,
            other.type_name()
        ))),
        None => Err(FnError::Arity(format!(
            "\"{}\" function expects at least 3 arguments.",
            name
        ))),
    }
}

fn expect_int<'a>(
    name: &str,
    arg_name: &str,
    value: Option<&ArgValue<'a>>,
) -> Result<IntInput<'a>, FnError> {
    match value {
        Some(ArgValue::Int(input)) => Ok(*input),
        Some(other) => Err(FnError::Type(format!(
            "\"{}\" function expects {} to be an integer, got {}.",
            name,
            arg_name,
            other.type_name()
        ))),
        None => Err(FnError::Arity(format!(
            "\"{}\" function expects at least 3 arguments.",
            name
        ))),
    }
}

fn exec_with_unit(
    name: &str,
    args: &[ArgValue<'_>],
    rows: usize,
    unit: AddressUnit,
) -> Result<StrColumn, FnError> {
    let subject = expect_str(name, "input", args.first())?;
    let replacement = expect_str(name, "replace", args.get(1))?;
    let offset = expect_int(name, "offset", args.get(2))?;
    let length = match args.get(3) {
        Some(value) => Some(expect_int(name, "length", Some(value))?),
        None => None,
    };
    Ok(execute(rows, subject, replacement, offset, length, unit))
}

fn overlay_exec(args: &[ArgValue<'_>], rows: usize) -> Result<StrColumn, FnError> {
    exec_with_unit("overlay", args, rows, AddressUnit::Bytes)
}

fn overlay_utf8_exec(args: &[ArgValue<'_>], rows: usize) -> Result<StrColumn, FnError> {
    exec_with_unit("overlayUTF8", args, rows, AddressUnit::CodePoints)
}

pub fn functions() -> Vec<Arc<FunctionDefinition>> {
    vec![
        Arc::new(FunctionDefinition {
            name: "overlay",
            aliases: &[],
            case: NameCase::Insensitive,
            arity: Arity::Range(3, Some(4)),
            exec_fn: overlay_exec,
        }),
        Arc::new(FunctionDefinition {
            name: "overlayUTF8",
            aliases: &[],
            case: NameCase::Sensitive,
            arity: Arity::Range(3, Some(4)),
            exec_fn: overlay_utf8_exec,
        }),
    ]
}
