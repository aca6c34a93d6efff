//! Model identifiers: random UUIDs in canonical hyphenated form.

use uuid::Uuid;

use super::error::{ClassifiedError, Outcome};

/// Length of the canonical text encoding, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`
pub const CANONICAL_LENGTH: usize = 36;

pub const INVALID_ID_MESSAGE: &str = "invalid id";

/// Assign a fresh identifier to a new model
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Parse a caller-supplied identifier.
///
/// Only the hyphenated form is accepted; the simple, braced and URN forms that
/// `Uuid::try_parse` would otherwise take are rejected. Hex digits may be in
/// either case.
pub fn parse(raw: &str) -> Outcome<Uuid> {
    if raw.len() != CANONICAL_LENGTH {
        return Err(ClassifiedError::invalid_id(INVALID_ID_MESSAGE));
    }

    Uuid::try_parse(raw).map_err(|_| ClassifiedError::invalid_id(INVALID_ID_MESSAGE))
}

/// Render an identifier in canonical form
pub fn format(id: &Uuid) -> String {
    id.hyphenated().to_string()
}
