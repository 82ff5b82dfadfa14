//! # murmur-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations. Repositories own all SQL; services above them only
//! see entities and `AppResult`.

pub mod connection;
pub mod migration;
pub mod repositories;
