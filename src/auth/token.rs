use rand::rngs::OsRng;
use rand::Rng;

/// Characters a token may contain.
pub const TOKEN_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789()=+-*/@#$%&!?";

pub const MIN_TOKEN_LENGTH: usize = 8;

/// Draws `length` characters uniformly from [`TOKEN_ALPHABET`] using the
/// operating system RNG. Lengths below [`MIN_TOKEN_LENGTH`] are raised to it.
pub fn generate_token(length: usize) -> String {
    let length = length.max(MIN_TOKEN_LENGTH);
    let mut rng = OsRng;
    (0..length)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}
