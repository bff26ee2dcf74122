/*
[INPUT]:  Operating system randomness
[OUTPUT]: Login nonces
[POS]:    Auth layer - nonce generation
[UPDATE]: When nonce length or alphabet changes
*/

use rand::Rng;

pub const NONCE_LENGTH: usize = 12;
pub const NONCE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random ASCII-letter nonce of [`NONCE_LENGTH`] characters
pub fn generate_nonce() -> String {
    let mut rng = rand::thread_rng();
    (0..NONCE_LENGTH)
        .map(|_| NONCE_ALPHABET[rng.gen_range(0..NONCE_ALPHABET.len())] as char)
        .collect()
}
