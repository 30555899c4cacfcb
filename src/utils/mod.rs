//! Utility modules for the storage-sense crate.
//!
//! - `bindings`: FFI bindings for the volume APIs (`statvfs`)

pub(crate) mod bindings;
