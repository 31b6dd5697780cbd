//! Forward-only cursors over fixed-stride arrays.
//!
//! Two shapes: [`ProgramHeaderIter`]/[`SectionHeaderIter`] walk a fixed-stride
//! array named directly in the file header; [`SymbolIter`], [`DynamicIter`],
//! [`RelocationIter`] walk every cached section whose type matches a filter
//! set. All five expose `reset()`, recomputing their initial counters rather
//! than reusing a value decremented during iteration, so a drained and reset
//! iterator reproduces the same sequence it yielded the first time.

use crate::buffer::MappedBuffer;
use crate::catalog::section_type::SectionType;
use crate::error::Result;
use crate::raw::{
    Elf32Dyn, Elf32Phdr, Elf32Rel, Elf32Rela, Elf32Shdr, Elf32Sym, Elf64Dyn, Elf64Phdr, Elf64Rel,
    Elf64Rela, Elf64Shdr, Elf64Sym,
};
use crate::views::{Class, DynamicEntry, ProgramHeader, Relocation, SectionHeader, Symbol};

/// Walks the program-header array at `e_phoff`, stride `e_phentsize`, for
/// `e_phnum` entries
pub struct ProgramHeaderIter<'a> {
    buffer: &'a MappedBuffer,
    class: Class,
    base_offset: usize,
    entry_size: usize,
    total: u16,
    index: u16,
}

impl<'a> ProgramHeaderIter<'a> {
    pub(crate) fn new(
        buffer: &'a MappedBuffer,
        class: Class,
        base_offset: u64,
        entry_size: u16,
        count: u16,
    ) -> Self {
        Self {
            buffer,
            class,
            base_offset: base_offset as usize,
            entry_size: entry_size as usize,
            total: count,
            index: 0,
        }
    }

    /// Restore the cursor to the first entry
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Iterator for ProgramHeaderIter<'_> {
    type Item = Result<ProgramHeader>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        let offset = self.base_offset + self.index as usize * self.entry_size;
        let item = match self.class {
            Class::Class32 => self
                .buffer
                .read_record::<Elf32Phdr>(offset)
                .map(ProgramHeader::Class32),
            Class::Class64 => self
                .buffer
                .read_record::<Elf64Phdr>(offset)
                .map(ProgramHeader::Class64),
        };
        self.index += 1;
        Some(item)
    }
}

/// Walks the section-header array at `e_shoff`, stride `e_shentsize`, for
/// `e_shnum` entries
pub struct SectionHeaderIter<'a> {
    buffer: &'a MappedBuffer,
    class: Class,
    base_offset: usize,
    entry_size: usize,
    total: u16,
    index: u16,
}

impl<'a> SectionHeaderIter<'a> {
    pub(crate) fn new(
        buffer: &'a MappedBuffer,
        class: Class,
        base_offset: u64,
        entry_size: u16,
        count: u16,
    ) -> Self {
        Self {
            buffer,
            class,
            base_offset: base_offset as usize,
            entry_size: entry_size as usize,
            total: count,
            index: 0,
        }
    }

    /// Restore the cursor to the first entry
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Iterator for SectionHeaderIter<'_> {
    type Item = Result<SectionHeader>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        let offset = self.base_offset + self.index as usize * self.entry_size;
        let item = match self.class {
            Class::Class32 => self
                .buffer
                .read_record::<Elf32Shdr>(offset)
                .map(SectionHeader::Class32),
            Class::Class64 => self
                .buffer
                .read_record::<Elf64Shdr>(offset)
                .map(SectionHeader::Class64),
        };
        self.index += 1;
        Some(item)
    }
}

fn entry_count(section: &SectionHeader) -> u64 {
    if section.entsize() == 0 {
        0
    } else {
        section.size() / section.entsize()
    }
}

/// A section-backed iterator: walks every section in `sections` whose type
/// is in `filter`, yielding one decoded entry per matching entry, in
/// section-cache order and ascending file-offset order within a section.
struct SectionBacked<'a> {
    buffer: &'a MappedBuffer,
    sections: &'a [SectionHeader],
    class: Class,
    filter: &'static [SectionType],
    /// The section-cache index most recently entered; exposed so callers can
    /// pair a yielded relocation with the section it came from (see
    /// `Elf::relocation_linked_symbol`).
    pub index: usize,
    entry_index: u64,
    remaining: u64,
}

impl<'a> SectionBacked<'a> {
    fn new(buffer: &'a MappedBuffer, sections: &'a [SectionHeader], class: Class, filter: &'static [SectionType]) -> Self {
        let remaining = Self::total(sections, filter);
        Self {
            buffer,
            sections,
            class,
            filter,
            index: 0,
            entry_index: 0,
            remaining,
        }
    }

    fn total(sections: &[SectionHeader], filter: &[SectionType]) -> u64 {
        sections
            .iter()
            .filter(|s| filter.contains(&s.section_type()))
            .map(entry_count)
            .sum()
    }

    fn reset(&mut self) {
        self.index = 0;
        self.entry_index = 0;
        self.remaining = Self::total(self.sections, self.filter);
    }

    /// Advance to the next matching entry, returning its containing section
    /// and the byte offset of the entry within the buffer.
    fn advance(&mut self) -> Option<(&'a SectionHeader, usize)> {
        loop {
            let section = self.sections.get(self.index)?;
            if !self.filter.contains(&section.section_type()) {
                self.index += 1;
                self.entry_index = 0;
                continue;
            }
            let count = entry_count(section);
            if self.entry_index >= count {
                self.index += 1;
                self.entry_index = 0;
                continue;
            }
            let offset = section.offset() as usize + (self.entry_index * section.entsize()) as usize;
            self.entry_index += 1;
            self.remaining = self.remaining.saturating_sub(1);
            return Some((section, offset));
        }
    }
}

const SYMBOL_SECTION_TYPES: [SectionType; 2] = [SectionType::SymTab, SectionType::DynSym];
const DYNAMIC_SECTION_TYPES: [SectionType; 1] = [SectionType::Dynamic];
const RELOCATION_SECTION_TYPES: [SectionType; 2] = [SectionType::Rel, SectionType::Rela];

/// Walks every `SYMTAB`/`DYNSYM` section, yielding one [`Symbol`] per entry
pub struct SymbolIter<'a>(SectionBacked<'a>);

impl<'a> SymbolIter<'a> {
    pub(crate) fn new(buffer: &'a MappedBuffer, sections: &'a [SectionHeader], class: Class) -> Self {
        Self(SectionBacked::new(buffer, sections, class, &SYMBOL_SECTION_TYPES))
    }

    /// Restore the cursor to the first entry
    pub fn reset(&mut self) {
        self.0.reset();
    }

    /// The section-cache index most recently entered
    pub fn index(&self) -> usize {
        self.0.index
    }
}

impl Iterator for SymbolIter<'_> {
    type Item = Result<Symbol>;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, offset) = self.0.advance()?;
        Some(match self.0.class {
            Class::Class32 => self.0.buffer.read_record::<Elf32Sym>(offset).map(Symbol::Class32),
            Class::Class64 => self.0.buffer.read_record::<Elf64Sym>(offset).map(Symbol::Class64),
        })
    }
}

/// Walks every `DYNAMIC` section, yielding one [`DynamicEntry`] per entry
pub struct DynamicIter<'a>(SectionBacked<'a>);

impl<'a> DynamicIter<'a> {
    pub(crate) fn new(buffer: &'a MappedBuffer, sections: &'a [SectionHeader], class: Class) -> Self {
        Self(SectionBacked::new(buffer, sections, class, &DYNAMIC_SECTION_TYPES))
    }

    /// Restore the cursor to the first entry
    pub fn reset(&mut self) {
        self.0.reset();
    }

    /// The section-cache index most recently entered
    pub fn index(&self) -> usize {
        self.0.index
    }
}

impl Iterator for DynamicIter<'_> {
    type Item = Result<DynamicEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, offset) = self.0.advance()?;
        Some(match self.0.class {
            Class::Class32 => self.0.buffer.read_record::<Elf32Dyn>(offset).map(DynamicEntry::Class32),
            Class::Class64 => self.0.buffer.read_record::<Elf64Dyn>(offset).map(DynamicEntry::Class64),
        })
    }
}

/// Walks every `REL`/`RELA` section, yielding one [`Relocation`] per entry,
/// picking the `rel` vs `rela` arm from the current section's type
pub struct RelocationIter<'a>(SectionBacked<'a>);

impl<'a> RelocationIter<'a> {
    pub(crate) fn new(buffer: &'a MappedBuffer, sections: &'a [SectionHeader], class: Class) -> Self {
        Self(SectionBacked::new(buffer, sections, class, &RELOCATION_SECTION_TYPES))
    }

    /// Restore the cursor to the first entry
    pub fn reset(&mut self) {
        self.0.reset();
    }

    /// The section-cache index most recently entered, i.e. the relocation
    /// section containing the entry most recently yielded. Used together
    /// with the yielded [`Relocation`] to call `Elf::relocation_linked_symbol`.
    pub fn index(&self) -> usize {
        self.0.index
    }
}

impl Iterator for RelocationIter<'_> {
    type Item = Result<Relocation>;

    fn next(&mut self) -> Option<Self::Item> {
        let (section, offset) = self.0.advance()?;
        let is_rela = section.section_type() == SectionType::Rela;
        Some(match (self.0.class, is_rela) {
            (Class::Class32, false) => self.0.buffer.read_record::<Elf32Rel>(offset).map(Relocation::Rel32),
            (Class::Class32, true) => self.0.buffer.read_record::<Elf32Rela>(offset).map(Relocation::Rela32),
            (Class::Class64, false) => self.0.buffer.read_record::<Elf64Rel>(offset).map(Relocation::Rel64),
            (Class::Class64, true) => self.0.buffer.read_record::<Elf64Rela>(offset).map(Relocation::Rela64),
        })
    }
}
