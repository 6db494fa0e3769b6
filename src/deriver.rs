//! Password deriver - builds a 12-character password seeded from the
//! address username.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use thiserror::Error;

use crate::checks::local_part;
use crate::scorer::score_password;
use crate::types::DerivedPassword;

/// Derived passwords always have exactly this many characters.
pub const PASSWORD_LENGTH: usize = 12;

/// Seed characters taken from the front of the username.
const SEED_LENGTH: usize = 3;

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error("username '{0}' is too short to seed a password")]
    InvalidSeed(String),
}

/// Derives a password from an email address using the process-wide RNG.
///
/// Callers are expected to have validated the address first; this
/// function does not re-validate and only guards against unusable seeds.
///
/// # Errors
/// `DeriveError::InvalidSeed` if the username (the part before the first
/// `@`, or the whole string without one) has fewer than 3 characters.
pub fn derive_password(email: &str) -> Result<DerivedPassword, DeriveError> {
    derive_password_with(email, &mut rand::thread_rng())
}

/// Derives a password using the supplied RNG.
///
/// The first four characters are picked deterministically from the seed,
/// one per alphabet; the remaining eight are drawn from the combined
/// alphabet via `rng`, and the sequence is shuffled with a uniform
/// Fisher-Yates pass.
pub fn derive_password_with<R: Rng>(
    email: &str,
    rng: &mut R,
) -> Result<DerivedPassword, DeriveError> {
    let username = local_part(email);

    let seed: Vec<u32> = username
        .chars()
        .take(SEED_LENGTH)
        .map(|c| c as u32)
        .collect();
    if seed.len() < SEED_LENGTH {
        return Err(DeriveError::InvalidSeed(username.to_string()));
    }

    let pick =
        |alphabet: &str, code: u32| alphabet.as_bytes()[code as usize % alphabet.len()] as char;

    // One character per alphabet. The special slot reuses seed[0].
    let mut chars = vec![
        pick(UPPERCASE_CHARS, seed[0]),
        pick(LOWERCASE_CHARS, seed[1]),
        pick(DIGIT_CHARS, seed[2]),
        pick(SPECIAL_CHARS, seed[0]),
    ];

    let pool = [UPPERCASE_CHARS, LOWERCASE_CHARS, DIGIT_CHARS, SPECIAL_CHARS].concat();
    let pool = pool.as_bytes();
    while chars.len() < PASSWORD_LENGTH {
        chars.push(pool[rng.gen_range(0..pool.len())] as char);
    }

    chars.shuffle(rng);

    let password: String = chars.into_iter().collect();
    let strength = score_password(&password);

    #[cfg(feature = "tracing")]
    tracing::info!(strength, "password derived");

    Ok(DerivedPassword {
        password: SecretString::new(password.into()),
        strength,
    })
}
