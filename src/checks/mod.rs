//! Email validation checks
//!
//! Each check inspects one aspect of the address and reports pass/fail.

mod alias;
mod local;
mod pattern;
mod presence;

pub use alias::reserved_alias_check;
pub use local::{banned_characters_check, consecutive_dots_check, local_part_length_check};
pub use pattern::gmail_pattern_check;
pub use presence::{contains_at_check, non_empty_check};

/// Local part of an address: everything before the first `@`.
///
/// An address with no `@` is its own local part. The checks and the
/// password deriver both rely on this split-on-first-`@` semantics.
pub(crate) fn local_part(email: &str) -> &str {
    match email.find('@') {
        Some(idx) => &email[..idx],
        None => email,
    }
}
