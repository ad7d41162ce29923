use crate::error::StorageResult;
use crate::models::AddressBook;

/// Storage for a whole address book.
///
/// The book is always loaded and saved as a single snapshot, enabling
/// different implementations (JSON file, in-memory for tests).
pub trait AddressBookRepository {
    /// Load the stored book, or an empty one if nothing was saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
