/// `Bearer {token}` value for the Authorization header
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Compare a presented Authorization value with the expected one
///
/// Exact match, evaluated in constant time for equal-length inputs.
pub fn verify_bearer(provided: &str, expected: &str) -> bool {
    provided.as_bytes().len() == expected.as_bytes().len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
