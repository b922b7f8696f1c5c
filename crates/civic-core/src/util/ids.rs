//! ID normalization utilities.
//!
//! Official records rarely carry an explicit identifier, while concerns
//! reference officials by id. These helpers derive a stable kebab-case id
//! from a display name so both sides agree.

/// Normalize an identifier to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Drops periods and apostrophes (`"John G. Roberts Jr."` → `john-g-roberts-jr`)
/// 4. Replaces underscores with hyphens
/// 5. Collapses multiple whitespace into single hyphens
///
/// # Examples
///
/// ```
/// use civic_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("Jon Ossoff"), "jon-ossoff");
/// assert_eq!(normalize_id("sen_ossoff"), "sen-ossoff");
/// assert_eq!(normalize_id("  Robert F. Kennedy Jr.  "), "robert-f-kennedy-jr");
/// assert_eq!(normalize_id("Beto O'Rourke"), "beto-orourke");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .replace(['.', '\'', '’'], "")
        .replace('_', " ") // Convert underscores to spaces first
        .split_whitespace() // Split on any whitespace, collapsing multiples
        .collect::<Vec<&str>>()
        .join("-")
}
