//! Vehicle listing.

use crate::models::required_text;
use crate::{CoreError, Identity, Record, Result as CoreResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub miles: u64,
    pub condition: String,
    pub available: bool,
    pub added_by: Identity,
}

/// Vehicle fields as posted by a client. Every field is optional at this
/// stage so that a missing one surfaces as a validation error naming it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewVehicle {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub miles: Option<u64>,
    #[serde(default)]
    pub condition: Option<String>,
    /// Defaults to `true` when omitted
    #[serde(default)]
    pub available: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleFields {
    pub name: String,
    pub miles: u64,
    pub condition: String,
    pub available: bool,
}

impl Record for Vehicle {
    type Draft = NewVehicle;
    type Fields = VehicleFields;

    const KIND: &'static str = "vehicle";

    fn id(&self) -> &str {
        &self.id
    }

    fn added_by(&self) -> &Identity {
        &self.added_by
    }

    fn validate(draft: NewVehicle) -> CoreResult<VehicleFields> {
        let name = required_text(draft.name, "name")?;
        let miles = draft.miles.ok_or_else(|| CoreError::missing_field("miles"))?;
        let condition = required_text(draft.condition, "condition")?;

        Ok(VehicleFields {
            name,
            miles,
            condition,
            available: draft.available.unwrap_or(true),
        })
    }

    fn assemble(id: String, fields: VehicleFields, added_by: Identity) -> Self {
        Self {
            id,
            name: fields.name,
            miles: fields.miles,
            condition: fields.condition,
            available: fields.available,
            added_by,
        }
    }
}
