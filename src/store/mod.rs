pub mod base;
pub mod memory;

// Re-export the primary store items so code outside can do
// "use crate::store::{SessionStore, create_store};"
pub use base::{create_store, PendingLogin, Session, SessionStore};
