use crate::{Identity, Result as CoreResult};

use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

/// A stored domain entity.
///
/// Records are created from a client-supplied draft in two steps: the
/// draft is validated into `Fields`, then the store assembles the final
/// record once it has generated an id and resolved the writer.
pub trait Record: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Candidate fields as received from a client
    type Draft: Send;
    /// Validated fields, ready to be stamped with an id and writer
    type Fields: Send;

    /// Human-readable kind used in log lines and error messages
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn added_by(&self) -> &Identity;

    /// Check that every required field is present and non-empty
    fn validate(draft: Self::Draft) -> CoreResult<Self::Fields>;

    fn assemble(id: String, fields: Self::Fields, added_by: Identity) -> Self;
}
