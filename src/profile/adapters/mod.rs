//! Adapter implementations for profile ports.

pub mod memory;

pub use memory::InMemoryProfileRepository;
