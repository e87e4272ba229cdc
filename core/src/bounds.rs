//! Range and name checks shared by every builder entry point.
//!
//! Callers hand in `i64` so that negative and zero values reach the check
//! instead of being ruled out by the parameter type; the remote API speaks
//! 32-bit unsigned integers, so accepted values are narrowed to `u32`.

use crate::error::{CriteriaError, Result};
use crate::query::{EXPAND, LIMIT, OFFSET, ORDER_BY};

/// Validates a page size: `1..=u32::MAX`.
pub(crate) fn limit(name: &'static str, value: i64) -> Result<u32> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(CriteriaError::InvalidArgument {
            name,
            expected: "a positive integer",
            value,
        }),
    }
}

/// Validates a skip count: `0..=u32::MAX`.
pub(crate) fn offset(name: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| CriteriaError::InvalidArgument {
        name,
        expected: "a non-negative integer",
        value,
    })
}

/// Characters the API reads structurally inside `orderBy` and `expand` values.
const SEPARATORS: &[u8] = b",():";

/// Parameter names the serializer emits itself.
const RESERVED_KEYS: &[&str] = &[ORDER_BY, OFFSET, LIMIT, EXPAND];

/// Whether `value` can stand as an attribute or relation name: non-empty and
/// free of separators. Usable from const constructors.
pub(crate) const fn is_plain_name(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        let mut j = 0;
        while j < SEPARATORS.len() {
            if bytes[i] == SEPARATORS[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Validates an attribute or relation name handed to a string-taking entry
/// point.
pub(crate) fn name(kind: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CriteriaError::EmptyName(kind));
    }
    if !is_plain_name(value) {
        return Err(CriteriaError::InvalidName {
            kind,
            name: value.to_owned(),
            reason: "must not contain `,` `(` `)` or `:`",
        });
    }
    Ok(())
}

/// Validates a filter key: non-empty and not one of the serializer's own
/// parameter names.
pub(crate) fn filter_key(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CriteriaError::EmptyName("filter key"));
    }
    if RESERVED_KEYS.contains(&value) {
        return Err(CriteriaError::InvalidName {
            kind: "filter key",
            name: value.to_owned(),
            reason: "is a reserved query parameter",
        });
    }
    Ok(())
}
