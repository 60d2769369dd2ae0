use clinic_model::EntityId;
use thiserror::Error;

/// Failure modes of a record store call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be reached at all. Aborts the whole commit; no
    /// partial result is produced for the call.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The store refused this particular record. Recorded against the row;
    /// the batch continues.
    #[error("{0}")]
    Rejected(String),
}

/// A procedure to create once its referenced entities are resolved. Monetary
/// value assignment is out of scope for import, so `value` is always `None`
/// here and filled in later through the regular CRUD surface.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProcedure {
    pub procedure_type: EntityId,
    pub doctor: EntityId,
    pub patient: EntityId,
    /// Normalized `YYYY-MM-DD` date.
    pub date: String,
    pub value: Option<f64>,
}

/// Capabilities reconciliation needs from the backing system.
///
/// Each find-or-create must be idempotent under normalized-name equality,
/// within one batch and across batches. Concurrent-caller safety of the
/// name-to-id resolution is the store's responsibility, not the reconciler's.
pub trait RecordStore {
    fn find_or_create_procedure_type(&mut self, name: &str) -> Result<EntityId, StoreError>;
    fn find_or_create_doctor(&mut self, name: &str) -> Result<EntityId, StoreError>;
    fn find_or_create_patient(&mut self, name: &str) -> Result<EntityId, StoreError>;
    fn create_procedure(&mut self, procedure: NewProcedure) -> Result<EntityId, StoreError>;
}
