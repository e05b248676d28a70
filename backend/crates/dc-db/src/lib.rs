pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::store::Store;
pub use error::{DbError, Result};
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::sqlite_profile_store::SqliteProfileStore;
pub use repositories::user_repository::UserRepository;
