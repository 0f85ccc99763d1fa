pub mod config;
pub mod error;
pub mod filter;
pub mod id_allocator;
pub mod lenient;
pub mod notifications;
