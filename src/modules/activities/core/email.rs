use validator::ValidateEmail;

/// Syntactic check only; the address is stored exactly as given.
pub fn is_valid_email(candidate: &str) -> bool {
    candidate.validate_email()
}
