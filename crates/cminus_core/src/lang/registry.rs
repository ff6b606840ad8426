//! Shareable metadata for `cminus_core::lang` registries.
//!
//! The `cminus_core::lang` module is a set of **registry-first** vocabularies (keywords and
//! symbols). This submodule provides the small, dependency-free metadata types reused by both.
//!
//! ## Notes
//! - These types are `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling, docs and diagnostics; lexical rules live in the scanner.

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Examples
/// ```rust
/// use cminus_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
}
