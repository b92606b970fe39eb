//! Shared CRUD port surface
//!
//! The lookup/existence/persist operations every entity repository exposes,
//! written once and extended by the per-entity port traits.

use async_trait::async_trait;

use crate::domain::{entities::Record, errors::DomainError};

/// Base repository interface for one entity kind.
///
/// `save` assigns a fresh id when the entity's id is unset and overwrites
/// the stored record otherwise.
#[async_trait]
pub trait Crud<E: Record>: Send + Sync {
    async fn exists_by_id(&self, id: E::Id) -> Result<bool, DomainError>;

    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, DomainError>;

    async fn find_all(&self) -> Result<Vec<E>, DomainError>;

    /// Insert or update, returning the persisted record.
    async fn save(&self, entity: E) -> Result<E, DomainError>;

    async fn delete_by_id(&self, id: E::Id) -> Result<(), DomainError>;
}
