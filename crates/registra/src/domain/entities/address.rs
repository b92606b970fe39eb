//! Address - residence record owned 1:1 by a person

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AddressId, PersonId};

/// Every person owns exactly one address row, keyed by the person id. The
/// row is looked up by `person_id` and overwritten on person updates rather
/// than duplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub person_id: PersonId,
    pub city: String,
    pub street: String,
    pub building: String,
    pub apartment: Option<String>,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        building: impl Into<String>,
        apartment: Option<String>,
    ) -> Self {
        Self {
            id: AddressId::UNSET,
            person_id: PersonId::UNSET,
            city: city.into(),
            street: street.into(),
            building: building.into(),
            apartment,
        }
    }
}
