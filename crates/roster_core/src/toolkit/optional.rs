//! Null-safe map -> filter -> fallback chain.

/// Fallback text for absent or filtered-out input.
pub const OPTIONAL_DEFAULT: &str = "Default Value (Input was null or didn't start with J)";

/// Uppercases `input` and keeps it only when the result starts with `J`.
///
/// Absent input and filtered-out values both resolve to [`OPTIONAL_DEFAULT`].
pub fn robust_optional_demo(input: Option<&str>) -> String {
    input
        .map(str::to_uppercase)
        .filter(|value| value.starts_with('J'))
        .unwrap_or_else(|| OPTIONAL_DEFAULT.to_string())
}
