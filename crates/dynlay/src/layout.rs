// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Struct layout engine: field registration and offset computation.

use crate::descriptor::TypeDescriptor;
use crate::util::align_up;
use crate::view::StructView;

/// A named field at a computed offset, owned by its [`StructLayout`].
///
/// Created once at registration, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    ty: TypeDescriptor,
    offset: usize,
}

impl Field {
    /// Field name, unique within the owning struct by caller contract.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's own descriptor (a clone owned by the layout).
    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    /// Byte offset from the struct's base address.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// An append-only sequence of named fields with computed offsets.
///
/// Fields keep registration order; each lands on the smallest offset at or
/// past the running cursor that satisfies its alignment. The struct's own
/// alignment is the maximum field alignment, and its size is padded to that
/// alignment so arrays of the struct tile correctly.
///
/// Cloning a layout deep-clones every field descriptor; two layouts never
/// alias type objects.
#[derive(Debug, Clone, PartialEq)]
pub struct StructLayout {
    fields: Vec<Field>,
    current_offset: usize,
    size: usize,
    alignment: usize,
}

impl StructLayout {
    /// New layout with no fields (size 0, alignment 1).
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            current_offset: 0,
            size: 0,
            alignment: 1,
        }
    }

    /// Register a field and return its index.
    ///
    /// The descriptor is cloned; the layout owns its copy. Fields cannot be
    /// removed or reordered afterwards. Names are expected to be unique
    /// within one struct; lookups return the first match.
    pub fn add_field(&mut self, name: impl Into<String>, ty: &TypeDescriptor) -> usize {
        let name = name.into();
        let ty = ty.clone();
        let offset = align_up(self.current_offset, ty.alignment());
        self.current_offset = offset + ty.size();
        self.alignment = self.alignment.max(ty.alignment());
        self.size = align_up(self.current_offset, self.alignment);
        log::trace!(
            "[layout] field '{}' at offset {} (struct size {}, align {})",
            name,
            offset,
            self.size,
            self.alignment
        );
        self.fields.push(Field { name, ty, offset });
        self.fields.len() - 1
    }

    /// Index of the named field, if registered.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// The named field's descriptor entry, if registered.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All fields in registration order. Index with the values returned by
    /// [`Self::add_field`].
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Total footprint in bytes, trailing padding included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Byte alignment requirement: the maximum field alignment (1 when
    /// empty).
    #[must_use]
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Bind a non-owning [`StructView`] to a buffer holding a value of this
    /// layout.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least `self.size()` bytes aligned to
    /// `self.alignment()`, holding a constructed value of this layout, and
    /// stay valid for as long as the view (or references obtained through
    /// it) is used.
    pub unsafe fn view(&self, ptr: *mut u8) -> StructView<'_> {
        StructView::new(self, ptr)
    }

    /// Construct every field in registration order at its offset.
    ///
    /// # Safety
    ///
    /// As [`TypeDescriptor::construct`]: `ptr` must be raw memory of at
    /// least `self.size()` bytes at `self.alignment()`.
    pub unsafe fn construct(&self, ptr: *mut u8) {
        for field in &self.fields {
            field.ty.construct(ptr.add(field.offset));
        }
    }

    /// Destruct every field in registration order.
    ///
    /// # Safety
    ///
    /// As [`TypeDescriptor::destruct`]: `ptr` must hold a constructed value
    /// of this layout; exactly one destruct per construct.
    pub unsafe fn destruct(&self, ptr: *mut u8) {
        for field in &self.fields {
            field.ty.destruct(ptr.add(field.offset));
        }
    }

    /// Construct a field-by-field copy of the struct at `src` into the raw
    /// buffer at `dest`.
    ///
    /// # Safety
    ///
    /// As [`TypeDescriptor::copy_data`]: `src` live, `dest` raw, no
    /// overlap.
    pub unsafe fn copy_data(&self, dest: *mut u8, src: *const u8) {
        for field in &self.fields {
            field.ty.copy_data(dest.add(field.offset), src.add(field.offset));
        }
    }
}

impl Default for StructLayout {
    fn default() -> Self {
        Self::new()
    }
}
