mod json_file_repository;
mod traits;

pub use json_file_repository::{JsonFileRepository, SNAPSHOT_VERSION};
pub use traits::AddressBookRepository;
