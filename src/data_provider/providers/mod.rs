mod memory_provider;

pub use memory_provider::{MemoryProvider, MemoryProviderArgs, MemoryProviderErrorKind};
