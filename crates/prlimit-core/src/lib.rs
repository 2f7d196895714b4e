//! # prlimit-core
//!
//! Pure translation logic for process resource limits.
//!
//! This crate holds everything that does not touch the kernel: the static
//! resource-name table, the limit-value codec (kernel sentinels vs. host
//! numbers), and the error taxonomy shared with the syscall boundary in
//! `prlimit-abi`. No `unsafe` code is permitted at the crate level; the
//! `libc` dependency is used for constants and type aliases only.

#![deny(unsafe_code)]

pub mod error;
pub mod resource;
pub mod value;

pub use error::PrlimitError;
pub use resource::{resolve_name, resource_table, ResourceEntry};
pub use value::{LimitPair, LimitValue, Slot};
