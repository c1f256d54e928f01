//! Short code generation.

/// Bytes of entropy per generated code. Four bytes render as eight hex
/// characters, which keeps collision probability negligible for the
/// expected low-volume use.
const CODE_LENGTH_BYTES: usize = 4;

/// Generates a random short code.
///
/// Uses `getrandom` for entropy and renders the result as lowercase
/// hexadecimal, producing an 8-character code. Collisions are not
/// re-checked by regeneration; the creation flow treats a generated
/// collision the same as a user-supplied one.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}
