//! enumc-rust: Rust source frontend for enumc
//!
//! Parses Rust source files with syn and extracts enum declarations into the
//! enumc-core intermediate representation.

pub mod frontend;

pub use frontend::RustFrontend;
