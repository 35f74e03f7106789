//! Account wide resources: connectivity, statistics, permissions and roles

pub mod connection;
pub mod permissions;
pub mod roles;
pub mod stats;

pub use permissions::Permissions;
pub use roles::Role;
pub use stats::Stats;
