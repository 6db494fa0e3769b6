//! Gmail address validation and seeded password derivation
//!
//! This library validates an email address against a narrow Gmail-only
//! rule set, producing a per-check report, and derives a 12-character
//! password seeded from the address username, scored with a fixed
//! strength rubric.
//!
//! # Features
//!
//! - `async` (default): Enables a debounced async validation wrapper
//!   with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `MAIL_PWD_RESERVED_PATH`: Custom path to the reserved-alias file
//!   (default: `./assets/reserved-aliases.txt`). When no file is
//!   loaded, a built-in list (`abuse`, `postmaster`) applies.
//!
//! # Example
//!
//! ```rust,no_run
//! use mail_pwd::{derive_password, validate_email};
//! use secrecy::ExposeSecret;
//!
//! let report = validate_email("validuser@gmail.com");
//! assert!(report.is_valid);
//!
//! let derived = derive_password("validuser@gmail.com").expect("seedable username");
//!
//! println!("Password: {}", derived.password.expose_secret());
//! println!("Strength: {}% ({})", derived.strength, derived.band());
//! ```

// Internal modules
mod aliases;
mod checks;
mod deriver;
mod scorer;
mod types;
mod validator;

// Public API
pub use aliases::{
    AliasListError, init_reserved_aliases, init_reserved_aliases_from_path, is_reserved_alias,
    reserved_aliases,
};
pub use deriver::{
    DIGIT_CHARS, DeriveError, LOWERCASE_CHARS, PASSWORD_LENGTH, SPECIAL_CHARS, UPPERCASE_CHARS,
    derive_password, derive_password_with,
};
pub use scorer::score_password;
pub use types::{CheckResult, DerivedPassword, StrengthBand, ValidationReport};
pub use validator::validate_email;

#[cfg(feature = "async")]
pub use validator::validate_email_tx;
