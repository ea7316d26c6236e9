//! Capability traits (ports) - interfaces the host application implements

mod auth;

pub use auth::AuthProvider;
