use crate::session::structs::session_record::SessionRecord;

/// Outcome of a token validation.
///
/// `Invalid` means the token is definitively bad (unknown or expired).
/// Infrastructure failures never map here; they surface as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(SessionRecord),
    Invalid,
}
