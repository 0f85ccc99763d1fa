//! Shared model and client-side core of the restaurant back office.
//!
//! Everything here is transport-agnostic: the frontend plugs its HTTP and
//! browser-storage adapters into the traits defined in [`usecases`] and
//! [`system::auth`].

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
