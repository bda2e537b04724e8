//! Unique test data generation.
//!
//! Author names must be unique, so tests that share a database derive their
//! names from ULIDs.

use ulid::Ulid;

/// Generate a unique author name in the format `{prefix} {ulid}`.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_author_name;
///
/// let a = unique_author_name("Tolkien");
/// let b = unique_author_name("Tolkien");
/// assert_ne!(a, b);
/// assert!(a.starts_with("Tolkien "));
/// ```
pub fn unique_author_name(prefix: &str) -> String {
    format!("{} {}", prefix, Ulid::new())
}
