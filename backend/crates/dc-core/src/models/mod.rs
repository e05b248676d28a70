pub mod dates;
pub mod experience;
pub mod experience_patch;
pub mod new_experience;
pub mod profile;
pub mod profile_fields;
pub mod social;
pub mod user;

/// Trimmed copy of an optional form value, `None` when blank.
pub(crate) fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
