// Adapters layer: concrete implementations of the domain ports.

pub mod memory;
pub mod opencage;

pub use memory::InMemoryUserRepository;
pub use opencage::OpenCageClient;
