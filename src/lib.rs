//! A library for reading, and lightly editing, ELF object files.
//!
//! An [`elf::Elf`] maps a file and decodes it through a class- and
//! endian-polymorphic layer: [`raw`] holds the fixed-layout on-disk records,
//! [`views`] wraps them in accessors that widen every field to a common
//! return type, and [`catalog`]/[`arch`] turn the numeric codes recorded in
//! those records (section types, symbol bindings, relocation types, ...)
//! into symbolic enums.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]

pub mod arch;
pub mod buffer;
pub mod catalog;
pub mod elf;
pub mod error;
pub mod iter;
pub mod raw;
pub mod string_table;
pub mod views;

pub use elf::{Elf, OpenOptions};
pub use error::{Error, Result};
