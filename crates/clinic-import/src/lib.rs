pub mod memory;
pub mod normalize;
pub mod reconcile;
pub mod session;
pub mod store;

pub use memory::MemoryStore;
pub use normalize::{display_name, normalize_name};
pub use reconcile::{MISSING_FIELDS_MESSAGE, reconcile};
pub use session::{ImportSession, SessionError};
pub use store::{NewProcedure, RecordStore, StoreError};
