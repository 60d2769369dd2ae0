//! In-memory record store for offline use.
//!
//! This is the offline counterpart of the real backend: the same
//! find-or-create semantics, backed by maps keyed on normalized names, with
//! optional persistence to a JSON state file so repeated imports against the
//! same file keep de-duplicating entities across runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clinic_model::{EntityId, ImportError};

use crate::normalize::{display_name, normalize_name};
use crate::store::{NewProcedure, RecordStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedEntity {
    pub id: EntityId,
    /// Display form of the first-seen spelling.
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcedureRecord {
    pub id: EntityId,
    pub procedure_type: EntityId,
    pub doctor: EntityId,
    pub patient: EntityId,
    pub date: String,
    pub value: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    next_id: u64,
    #[serde(default)]
    generated_at: Option<DateTime<Utc>>,
    doctors: BTreeMap<String, NamedEntity>,
    patients: BTreeMap<String, NamedEntity>,
    procedure_types: BTreeMap<String, NamedEntity>,
    procedures: Vec<ProcedureRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Load a previously saved state file.
    pub fn load(path: &Path) -> Result<Self, ImportError> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|error| {
            ImportError::StoreUnavailable(format!(
                "state file {} is not readable: {error}",
                path.display()
            ))
        })
    }

    /// Save the current state, stamping the save time.
    pub fn save(&mut self, path: &Path) -> Result<(), ImportError> {
        self.generated_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(self).map_err(|error| {
            ImportError::StoreUnavailable(format!("state not serializable: {error}"))
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn procedure_type_count(&self) -> usize {
        self.procedure_types.len()
    }

    pub fn procedures(&self) -> &[ProcedureRecord] {
        &self.procedures
    }

    fn allocate(&mut self) -> EntityId {
        // Defends against zero-initialized state files.
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        EntityId::new(id)
    }

    fn find_or_create(&mut self, kind: EntityKind, name: &str) -> EntityId {
        let key = normalize_name(name);
        if let Some(existing) = self.map(kind).get(&key) {
            return existing.id;
        }
        let id = self.allocate();
        let entity = NamedEntity {
            id,
            name: display_name(name),
        };
        self.map(kind).insert(key, entity);
        id
    }

    fn map(&mut self, kind: EntityKind) -> &mut BTreeMap<String, NamedEntity> {
        match kind {
            EntityKind::Doctor => &mut self.doctors,
            EntityKind::Patient => &mut self.patients,
            EntityKind::ProcedureType => &mut self.procedure_types,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum EntityKind {
    Doctor,
    Patient,
    ProcedureType,
}

impl RecordStore for MemoryStore {
    fn find_or_create_procedure_type(&mut self, name: &str) -> Result<EntityId, StoreError> {
        Ok(self.find_or_create(EntityKind::ProcedureType, name))
    }

    fn find_or_create_doctor(&mut self, name: &str) -> Result<EntityId, StoreError> {
        Ok(self.find_or_create(EntityKind::Doctor, name))
    }

    fn find_or_create_patient(&mut self, name: &str) -> Result<EntityId, StoreError> {
        Ok(self.find_or_create(EntityKind::Patient, name))
    }

    fn create_procedure(&mut self, procedure: NewProcedure) -> Result<EntityId, StoreError> {
        let id = self.allocate();
        self.procedures.push(ProcedureRecord {
            id,
            procedure_type: procedure.procedure_type,
            doctor: procedure.doctor,
            patient: procedure.patient,
            date: procedure.date,
            value: procedure.value,
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_or_create_is_idempotent_per_normalized_name() {
        let mut store = MemoryStore::new();
        let first = store.find_or_create_doctor("Dr. Ana").expect("create");
        let second = store.find_or_create_doctor(" dr.  ana ").expect("reuse");
        assert_eq!(first, second);
        assert_eq!(store.doctor_count(), 1);
    }

    #[test]
    fn ids_are_unique_across_entity_kinds() {
        let mut store = MemoryStore::new();
        let doctor = store.find_or_create_doctor("Dr. Ana").expect("doctor");
        let patient = store.find_or_create_patient("Dr. Ana").expect("patient");
        assert_ne!(doctor, patient);
    }

    #[test]
    fn state_survives_a_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");

        let mut store = MemoryStore::new();
        let original = store.find_or_create_doctor("Dr. Ana").expect("create");
        store.save(&path).expect("save");

        let mut reloaded = MemoryStore::load(&path).expect("load");
        let resolved = reloaded.find_or_create_doctor("DR. ANA").expect("reuse");
        assert_eq!(original, resolved);
        assert_eq!(reloaded.doctor_count(), 1);
    }

    #[test]
    fn corrupt_state_file_reads_as_store_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").expect("write");
        let error = MemoryStore::load(&path).unwrap_err();
        assert!(matches!(error, ImportError::StoreUnavailable(_)));
    }
}
