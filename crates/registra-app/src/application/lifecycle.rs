//! Entity lifecycle template
//!
//! The add/update/delete/find skeleton every entity kind shares, written
//! once. Per-kind behavior plugs in through two hooks: a duplicate rule run
//! before writes and a reconcile step run on update payloads.

use std::fmt;

use async_trait::async_trait;

use registra::{Crud, DomainError, Record};

/// Id type of a service's entity.
pub type IdOf<S> = <<S as LifecycleService>::Entity as Record>::Id;

/// Lifecycle operations for one entity kind.
///
/// Check ordering is part of the contract: existence is verified before the
/// duplicate rule runs, so an update or delete against a missing id fails
/// with not-found even when the payload would also violate a uniqueness
/// rule.
///
/// The existence and duplicate checks are not atomic with the save that
/// follows. Backing stores are expected to enforce the same rules with real
/// constraints; this layer performs no retries and no recovery.
#[async_trait]
pub trait LifecycleService: Send + Sync {
    type Entity: Record;
    type Repo: Crud<Self::Entity>;

    fn repo(&self) -> &Self::Repo;

    /// Duplicate rule for this entity kind; accepts everything by default.
    ///
    /// `exclude` carries the id being updated. A record is never a
    /// duplicate of itself.
    async fn ensure_no_duplicate(
        &self,
        _entity: &Self::Entity,
        _exclude: Option<IdOf<Self>>,
    ) -> Result<(), DomainError> {
        Ok(())
    }

    /// Fix-up applied to an update payload before it is written, e.g. the
    /// address merge on person records.
    async fn reconcile(&self, entity: Self::Entity) -> Result<Self::Entity, DomainError> {
        Ok(entity)
    }

    /// Persist a new entity. The id is unset until storage assigns one.
    async fn add(&self, entity: Self::Entity) -> Result<Self::Entity, DomainError> {
        self.ensure_no_duplicate(&entity, None).await?;
        let saved = self.repo().save(entity).await?;
        tracing::info!("created {} {}", Self::Entity::KIND, saved.id());
        Ok(saved)
    }

    /// Replace the entity stored under `id` with the given payload.
    async fn update(
        &self,
        id: IdOf<Self>,
        mut entity: Self::Entity,
    ) -> Result<Self::Entity, DomainError> {
        if !self.repo().exists_by_id(id).await? {
            return Err(DomainError::not_found(Self::Entity::KIND, id));
        }
        entity.assign_id(id);
        self.ensure_no_duplicate(&entity, Some(id)).await?;
        let entity = self.reconcile(entity).await?;
        let saved = self.repo().save(entity).await?;
        tracing::info!("updated {} {}", Self::Entity::KIND, id);
        Ok(saved)
    }

    /// Delete the entity stored under `id`. Unconditional once existence is
    /// confirmed.
    async fn delete(&self, id: IdOf<Self>) -> Result<(), DomainError> {
        if !self.repo().exists_by_id(id).await? {
            return Err(DomainError::not_found(Self::Entity::KIND, id));
        }
        self.repo().delete_by_id(id).await?;
        tracing::info!("deleted {} {}", Self::Entity::KIND, id);
        Ok(())
    }

    async fn find(&self, id: IdOf<Self>) -> Result<Self::Entity, DomainError> {
        self.repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Self::Entity::KIND, id))
    }

    async fn find_all(&self) -> Result<Vec<Self::Entity>, DomainError> {
        let all = self.repo().find_all().await?;
        non_empty(format!("{} records", Self::Entity::KIND), all)
    }
}

/// Empty results surface as not-found, never as an empty list.
pub(crate) fn non_empty<T>(what: impl fmt::Display, items: Vec<T>) -> Result<Vec<T>, DomainError> {
    if items.is_empty() {
        Err(DomainError::nothing_found(what))
    } else {
        Ok(items)
    }
}
