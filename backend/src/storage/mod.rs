//! # Storage Module
//!
//! Persistence for models. The domain layer only sees the [`ModelStorage`]
//! trait; the in-memory repository is the backend the binary wires in.

pub mod memory;
pub mod traits;

pub use memory::InMemoryModelRepository;
pub use traits::ModelStorage;
