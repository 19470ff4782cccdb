pub mod configuration;
pub mod group;
pub mod identity;
pub mod issues;
pub mod package_set;
pub mod resolver;
pub mod types;
