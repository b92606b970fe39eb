//! Address Repository Port

use async_trait::async_trait;

use crate::domain::{Address, DomainError, PersonId};

/// Lookup for the address row a person owns.
///
/// Address rows are written as part of person saves; this port only exposes
/// the back-reference lookup the merge rule needs.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn find_by_person_id(&self, person_id: PersonId)
        -> Result<Option<Address>, DomainError>;
}
