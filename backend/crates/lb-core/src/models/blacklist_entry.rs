//! Blacklist entry: a player flagged by a whitelisted member.

use crate::models::required_text;
use crate::{Identity, Record, Result as CoreResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlacklistEntry {
    pub id: String,
    /// Player being blacklisted
    pub target: String,
    pub reason: String,
    pub added_by: Identity,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBlacklistEntry {
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistFields {
    pub target: String,
    pub reason: String,
}

impl Record for BlacklistEntry {
    type Draft = NewBlacklistEntry;
    type Fields = BlacklistFields;

    const KIND: &'static str = "blacklist entry";

    fn id(&self) -> &str {
        &self.id
    }

    fn added_by(&self) -> &Identity {
        &self.added_by
    }

    fn validate(draft: NewBlacklistEntry) -> CoreResult<BlacklistFields> {
        Ok(BlacklistFields {
            target: required_text(draft.target, "target")?,
            reason: required_text(draft.reason, "reason")?,
        })
    }

    fn assemble(id: String, fields: BlacklistFields, added_by: Identity) -> Self {
        Self {
            id,
            target: fields.target,
            reason: fields.reason,
            added_by,
        }
    }
}
