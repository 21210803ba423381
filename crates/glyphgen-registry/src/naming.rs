//! Display-name derivation for registered members.
//!
//! Field members use their identifier verbatim. Accessor members follow the
//! getter convention, so their identifier is normalized: the `get` prefix,
//! one leading underscore, and the synthetic `__meta` suffix (carried by
//! codegen-emitted entries) are stripped, and the first character is
//! upper-cased if it is lowercase.

/// Conventional accessor prefix stripped during derivation.
pub const ACCESSOR_PREFIX: &str = "get";

/// Synthetic-metadata suffix carried by codegen-emitted accessor entries.
pub const SYNTHETIC_SUFFIX: &str = "__meta";

/// Derive a display name from an accessor identifier.
///
/// Returns an empty string when nothing remains after stripping; callers
/// fall back to [`fallback_name`] in that case.
pub fn derive_accessor_name(ident: &str) -> String {
    let name = ident.strip_prefix(ACCESSOR_PREFIX).unwrap_or(ident);
    let name = name.strip_prefix('_').unwrap_or(name);
    let name = name.strip_suffix(SYNTHETIC_SUFFIX).unwrap_or(name);

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out = String::with_capacity(name.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => name.to_owned(),
    }
}

/// Fallback name for an accessor whose derived name is blank:
/// `<owner>_<ident>`.
pub fn fallback_name(owner: &str, ident: &str) -> String {
    format!("{}_{}", owner, ident)
}
