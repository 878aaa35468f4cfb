//! Tournament store: loads the data file once and holds the records for the
//! rest of the session.

pub mod error;
pub mod loader;
pub mod source;
pub mod store;

pub use error::LoadError;
pub use loader::StoreLoader;
pub use source::DataSource;
pub use store::TournamentStore;
