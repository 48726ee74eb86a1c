pub mod memory;
pub mod stdio;

pub use memory::MemoryJobQueue;
pub use stdio::StdioJobQueue;
