//! Content rules shared by request bodies.

use validator::ValidationError;

/// Text columns cannot store NUL; a value containing one is malformed input.
pub fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut err = ValidationError::new("nul_character");
        err.message = Some("must not contain NUL characters".into());
        return Err(err);
    }
    Ok(())
}
