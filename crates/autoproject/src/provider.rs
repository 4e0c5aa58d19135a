mod memory;
pub use memory::Memory;

pub use autoproject_core::provider::Provider;
