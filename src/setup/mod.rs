pub mod access;
pub mod coordinator;
pub mod credentials;

pub use access::{ADMIN_ALL_OBJECTS, FREE_LICENSE_GROUP};
pub use coordinator::{CurrentAppFn, SetupCoordinator};
pub use credentials::make_stanza;
