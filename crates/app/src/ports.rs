//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Every port is single-threaded: handlers are plain boxed closures and
//! implementations are expected to be cheap `Clone` handles, matching the
//! browser event loop that drives them.

pub mod document;
pub mod scheduler;
pub mod storage;

pub use document::{PageDocument, PageElement};
pub use scheduler::TaskScheduler;
pub use storage::PreferenceStore;
