// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Non-owning field accessors over a struct buffer.

use crate::descriptor::AccessError;
use crate::layout::StructLayout;
use std::mem;

/// A lightweight accessor binding a [`StructLayout`] to one buffer address.
///
/// Views own nothing; they only do pointer arithmetic against the layout's
/// field offsets. Typed access checks the representation size against the
/// field's descriptor (see [`Self::field`]); type identity beyond size stays
/// the caller's contract.
#[derive(Clone, Copy)]
pub struct StructView<'a> {
    layout: &'a StructLayout,
    ptr: *mut u8,
}

impl<'a> StructView<'a> {
    pub(crate) fn new(layout: &'a StructLayout, ptr: *mut u8) -> Self {
        Self { layout, ptr }
    }

    /// The layout this view is bound to.
    pub fn layout(&self) -> &'a StructLayout {
        self.layout
    }

    /// Raw address of the field at `index`.
    ///
    /// Panics if `index` is out of range, like slice indexing: layouts are
    /// fixed before any buffer access happens.
    #[must_use]
    pub fn field_ptr(&self, index: usize) -> *mut u8 {
        let field = &self.layout.fields()[index];
        // SAFETY: offset + size <= layout.size(), which is within the viewed
        // buffer per the `StructLayout::view` contract.
        unsafe { self.ptr.add(field.offset()) }
    }

    /// Raw address of the named field.
    pub fn field_ptr_named(&self, name: &str) -> Result<*mut u8, AccessError> {
        let index = self
            .layout
            .field_index(name)
            .ok_or_else(|| AccessError::FieldNotFound(name.to_string()))?;
        Ok(self.field_ptr(index))
    }

    /// Reinterpret the field at `index` as `T`.
    ///
    /// The size of `T` is checked against the field descriptor's size and a
    /// mismatch is an error, in release builds too.
    ///
    /// # Safety
    ///
    /// `T` must be the representation type registered for this field (the
    /// size check cannot tell same-sized types apart), the viewed buffer
    /// must still hold a constructed value, and no other reference to this
    /// field may be live while the returned one is.
    pub unsafe fn field<T>(&self, index: usize) -> Result<&'a mut T, AccessError> {
        let field = &self.layout.fields()[index];
        if mem::size_of::<T>() != field.ty().size() {
            return Err(AccessError::SizeMismatch {
                expected: field.ty().size(),
                got: mem::size_of::<T>(),
            });
        }
        Ok(&mut *self.field_ptr(index).cast::<T>())
    }

    /// Reinterpret the named field as `T`.
    ///
    /// # Safety
    ///
    /// As [`Self::field`].
    pub unsafe fn field_named<T>(&self, name: &str) -> Result<&'a mut T, AccessError> {
        let index = self
            .layout
            .field_index(name)
            .ok_or_else(|| AccessError::FieldNotFound(name.to_string()))?;
        self.field(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TypedBuffer;
    use crate::descriptor::TypeDescriptor;
    use crate::scalar::ScalarKind;

    fn vec2() -> TypeDescriptor {
        let mut layout = StructLayout::new();
        layout.add_field("x", &TypeDescriptor::scalar(ScalarKind::F32));
        layout.add_field("y", &TypeDescriptor::scalar(ScalarKind::F32));
        TypeDescriptor::structure(layout)
    }

    #[test]
    fn test_field_access_by_index_and_name() {
        let ty = vec2();
        let mut buf = TypedBuffer::new(&ty);
        let view = buf.view().expect("struct type");

        // SAFETY: f32 is the registered representation of both fields.
        unsafe {
            *view.field::<f32>(0).expect("x") = 69.0;
            *view.field_named::<f32>("y").expect("y") = 42.0;

            assert_eq!(*view.field_named::<f32>("x").expect("x"), 69.0);
            assert_eq!(*view.field::<f32>(1).expect("y"), 42.0);
        }
        assert_eq!(view.field_ptr(1) as usize - view.field_ptr(0) as usize, 4);
    }

    #[test]
    fn test_unknown_field() {
        let ty = vec2();
        let mut buf = TypedBuffer::new(&ty);
        let view = buf.view().expect("struct type");
        // SAFETY: the failing lookup returns before any deref.
        unsafe {
            assert_eq!(
                view.field_named::<f32>("z").unwrap_err(),
                AccessError::FieldNotFound("z".into())
            );
        }
        assert!(view.field_ptr_named("z").is_err());
    }

    #[test]
    fn test_size_mismatch() {
        let ty = vec2();
        let mut buf = TypedBuffer::new(&ty);
        let view = buf.view().expect("struct type");
        // SAFETY: the mismatching access returns before any deref.
        unsafe {
            assert_eq!(
                view.field::<f64>(0).unwrap_err(),
                AccessError::SizeMismatch {
                    expected: 4,
                    got: 8
                }
            );
        }
    }
}
