//! Error types for ELF object file handling

use typed_builder::TypedBuilder;

/// The result type returned by fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, TypedBuilder)]
/// Additional context attached to an error, pointing at the byte offset in
/// the mapped buffer where the failure was detected
pub struct ErrorContext {
    /// The byte offset into the mapped buffer
    #[builder(default)]
    pub offset: usize,
}

impl ErrorContext {
    /// Build a context pointing at `offset`
    pub fn at(offset: usize) -> Self {
        Self { offset }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq, Hash)]
/// Error type for errors during ELF object handling
pub enum Error {
    // Mapping
    #[error("failed to open file: {message}")]
    OpenFailed {
        /// Description of the underlying I/O failure
        message: String,
    },
    #[error("failed to map file into memory: {message}")]
    MapFailed {
        /// Description of the underlying mmap failure
        message: String,
    },
    #[error("invalid offset {context:?}: out of bounds for a buffer of length {length}")]
    InvalidOffset {
        /// Where the out-of-bounds access was attempted
        context: ErrorContext,
        /// The length of the mapped buffer
        length: usize,
    },
    #[error("buffer was not opened in read-write mode")]
    NotMutable,
    #[error("no mutable view is available for this buffer")]
    NoMutableBuffer,
    #[error("failed to write bytes: {message}")]
    WriteFailed {
        /// Description of the underlying I/O failure
        message: String,
    },
    #[error("unexpected end of stream at {context:?}")]
    UnexpectedEof {
        /// Where the read ran past the end of the buffer
        context: ErrorContext,
    },

    // Structural
    #[error("bad ELF magic at {context:?}")]
    BadMagic {
        /// Where the magic check failed (always offset 0)
        context: ErrorContext,
    },
    #[error("invalid ELF class byte {value:#x} at {context:?}")]
    InvalidClass {
        /// The raw, unrecognized class byte
        value: u8,
        /// Where the class byte was read from
        context: ErrorContext,
    },
    #[error("invalid ELF data encoding byte {value:#x} at {context:?}")]
    InvalidEndian {
        /// The raw, unrecognized data-encoding byte
        value: u8,
        /// Where the data-encoding byte was read from
        context: ErrorContext,
    },
    #[error("end of stream reached while iterating")]
    EndOfStream,

    // Table resolution
    #[error("no section name string table is present")]
    NoSectionStringTable,
    #[error(".dynstr is not present")]
    DynStringTableNotFound,
    #[error("invalid name offset {offset} for a string table of length {length}")]
    InvalidNameOffset {
        /// The requested offset
        offset: u32,
        /// The length of the string table it was resolved against
        length: usize,
    },
    #[error("section not found")]
    SectionNotFound,
    #[error("invalid section index {index} (section header table has {count} entries)")]
    InvalidSectionIndex {
        /// The index that was requested
        index: usize,
        /// The number of sections present
        count: usize,
    },
    #[error("section is empty")]
    EmptySection,

    // Mutation
    #[error(
        "payload of {payload_len} bytes does not fit in a section of size {section_size} \
         (payload must be strictly smaller than the section)"
    )]
    PayloadTooLarge {
        /// The length of the caller-supplied payload
        payload_len: usize,
        /// The size of the section being written into
        section_size: u64,
    },

    // Link validation
    #[error("invalid link index {index} (section header table has {count} entries)")]
    InvalidLinkIndex {
        /// The `sh_link` value that failed validation
        index: u64,
        /// The number of sections present
        count: usize,
    },
    #[error("section at index {index} has type {ty:?}, expected SYMTAB or DYNSYM")]
    InvalidLinkedSection {
        /// The section index that was linked to
        index: u64,
        /// The actual type of the linked section
        ty: crate::catalog::section_type::SectionType,
    },

    // Decoding
    #[error("cannot iterate entries: entry size is zero")]
    CannotGetEntries,
    #[error("cannot decode class/endian union: {message}")]
    CannotGetUnion {
        /// What went wrong decoding the class-tagged union
        message: String,
    },
    #[error("cannot decode relocation union: {message}")]
    CannotGetRelocationUnion {
        /// What went wrong decoding the rel/rela union
        message: String,
    },
    #[error("no cached name for symbol name offset {offset}")]
    SymbolNameNotFound {
        /// The symbol's `st_name` offset
        offset: u32,
    },
    #[error("machine {machine:?} has no relocation type catalog")]
    UnknownRelocationArch {
        /// The machine that has no known relocation catalog
        machine: crate::catalog::machine::Machine,
    },
    #[error("relocation type {code:#x} is not a recognized code for machine {machine:?}")]
    UnknownRelocationCode {
        /// The machine whose catalog was consulted
        machine: crate::catalog::machine::Machine,
        /// The raw relocation type code that was not found in that catalog
        code: u32,
    },
}
