use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A bare NaN in value position, e.g. `"bathrooms": NaN`
    static ref NAN_VALUE_REGEX: Regex = Regex::new(r":(\s*)NaN\b").unwrap();
}

/// Rewrites the provider's non-standard `NaN` values to `null` so the body
/// parses as JSON. Text without NaN tokens is returned untouched.
pub fn repair_nan_tokens(body: &str) -> Cow<'_, str> {
    NAN_VALUE_REGEX.replace_all(body, ":${1}null")
}
