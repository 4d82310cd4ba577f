//! Strong password generator.
//!
//! Every generated password holds at least one uppercase letter, one
//! lowercase letter, one digit and one symbol, so it always meets all five
//! strength criteria.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Range the target length is drawn from.
pub const LENGTH_RANGE: RangeInclusive<usize> = 12..=16;

/// Generates a strong password using the thread-local CSPRNG.
pub fn generate_password() -> SecretString {
    generate_password_with(&mut rand::thread_rng())
}

/// Generates a strong password from the given randomness source.
///
/// 1. pick the length uniformly in [`LENGTH_RANGE`];
/// 2. seed one character from each class, in class order;
/// 3. fill up with characters drawn from the union of all classes;
/// 4. shuffle so the seeded characters land anywhere.
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R) -> SecretString {
    let length = rng.gen_range(LENGTH_RANGE);
    let mut password: Vec<u8> = Vec::with_capacity(length);

    for class in [UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS] {
        password.push(random_char(rng, class));
    }

    let all: Vec<u8> = [UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS].concat();
    while password.len() < length {
        password.push(random_char(rng, &all));
    }

    password.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!("generated password of length {}", length);

    // Every alphabet is ASCII, one byte per char
    let password: String = password.into_iter().map(char::from).collect();
    SecretString::new(password.into())
}

fn random_char<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}
