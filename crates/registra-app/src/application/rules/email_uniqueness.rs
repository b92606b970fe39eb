//! Email uniqueness rule
//!
//! The email is the authentication identifier, so the check spans every
//! person role rather than being scoped to one of them.

use std::sync::Arc;

use registra::{DomainError, PersonDirectory, PersonId};

/// Cross-role email uniqueness check.
pub struct EmailUniqueness {
    directory: Arc<dyn PersonDirectory>,
}

impl EmailUniqueness {
    pub fn new(directory: Arc<dyn PersonDirectory>) -> Self {
        Self { directory }
    }

    /// Fails with already-exists when `email` is held by a stored person
    /// other than `exclude`. Keeping one's own email is never a conflict;
    /// on create there is nothing to exclude.
    pub async fn ensure_free(
        &self,
        email: &str,
        exclude: Option<PersonId>,
    ) -> Result<(), DomainError> {
        match self.directory.find_by_email(email).await? {
            Some(existing) if exclude != Some(existing.id) => {
                Err(DomainError::already_exists(format!(
                    "email {email} is already taken by {} {}",
                    existing.role, existing.id
                )))
            }
            _ => Ok(()),
        }
    }
}
