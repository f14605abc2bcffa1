//! Persistence for the address book.
//!
//! The whole book is one opaque snapshot: loaded once at startup, saved
//! once at clean shutdown. There is no incremental persistence and no
//! crash recovery; an abrupt termination loses changes since the last
//! save.

pub mod json_file;

pub use json_file::JsonFileStore;

use crate::book::AddressBook;
use crate::error::StorageResult;

/// Storage abstraction over the persisted address book.
///
/// Enables different implementations (file snapshot, in-memory for
/// tests).
pub trait BookStore {
    /// Load the whole book. A store with no prior snapshot yields an
    /// empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Overwrite the snapshot with the whole book.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
