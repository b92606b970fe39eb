//! Address merge rule
//!
//! Every person owns exactly one address row. Update payloads arrive with a
//! fresh address value; adopting the stored row's ids makes the subsequent
//! save overwrite that row instead of inserting a second one.

use std::sync::Arc;

use registra::{AddressRepository, DomainError, Person};

/// Keeps the person-address relation 1:1 across updates.
pub struct AddressMerge {
    addresses: Arc<dyn AddressRepository>,
}

impl AddressMerge {
    pub fn new(addresses: Arc<dyn AddressRepository>) -> Self {
        Self { addresses }
    }

    /// Point the payload's address at the row already stored for this
    /// person, if any. On create no row exists yet and the payload passes
    /// through untouched.
    pub async fn apply(&self, person: &mut Person) -> Result<(), DomainError> {
        if let Some(stored) = self.addresses.find_by_person_id(person.id).await? {
            person.address.id = stored.id;
            person.address.person_id = stored.person_id;
        }
        Ok(())
    }
}
