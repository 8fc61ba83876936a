pub mod io;
pub mod pipeline;
pub mod splicing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use pipeline::*;
pub use splicing::*;
