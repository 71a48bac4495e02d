// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scoped acquisition of constructed values.
//!
//! Raw construct/destruct over caller memory stays available on the
//! descriptor types; [`TypedBuffer`] is the owned path that brackets the
//! whole lifecycle (allocate, construct, destruct, release) in one scope.

use crate::descriptor::TypeDescriptor;
use crate::vector::VecData;
use crate::view::StructView;
use std::alloc::{self, Layout};
use std::slice;

/// Owns one constructed value of a described type.
///
/// The buffer is allocated zeroed (so inter-field padding stays initialized
/// for whole-buffer reads), constructed on creation, and destructed exactly
/// once on drop.
#[derive(Debug)]
pub struct TypedBuffer {
    ty: TypeDescriptor,
    data: *mut u8,
}

impl TypedBuffer {
    /// Allocate and default-construct a value of `ty`.
    ///
    /// The descriptor is cloned; the buffer owns its copy.
    #[must_use]
    pub fn new(ty: &TypeDescriptor) -> Self {
        let ty = ty.clone();
        let data = alloc_zeroed_for(&ty);
        // SAFETY: data is freshly allocated raw memory of ty.size() bytes at
        // ty.alignment().
        unsafe { ty.construct(data) };
        Self { ty, data }
    }

    /// The descriptor this buffer was built for.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.ty
    }

    /// Base address of the value.
    pub fn as_ptr(&self) -> *const u8 {
        self.data
    }

    /// Mutable base address of the value.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.data
    }

    /// The raw bytes of the buffer, padding included.
    pub fn bytes(&self) -> &[u8] {
        // SAFETY: the allocation is ty.size() bytes and was zeroed, so every
        // byte (live fields and padding alike) is initialized.
        unsafe { slice::from_raw_parts(self.data, self.ty.size()) }
    }

    /// Struct view over the value, when the type is a struct.
    pub fn view(&mut self) -> Option<StructView<'_>> {
        let layout = self.ty.as_struct()?;
        // SAFETY: the buffer is sized and aligned for the layout and holds a
        // constructed value for the lifetime of the borrow.
        Some(unsafe { layout.view(self.data) })
    }

    /// The vector control block, when the type is a vector.
    pub fn vec_mut(&mut self) -> Option<&mut VecData> {
        self.ty.as_vec()?;
        // SAFETY: the buffer holds a constructed VecData; the &mut borrow on
        // self keeps it exclusive.
        Some(unsafe { &mut *self.data.cast::<VecData>() })
    }
}

impl Clone for TypedBuffer {
    /// Deep copy: a fresh buffer copy-constructed from this value.
    fn clone(&self) -> Self {
        let ty = self.ty.clone();
        let data = alloc_zeroed_for(&ty);
        // SAFETY: data is raw storage for ty; self.data holds a live value;
        // the allocations are distinct.
        unsafe { ty.copy_data(data, self.data) };
        Self { ty, data }
    }
}

impl Drop for TypedBuffer {
    fn drop(&mut self) {
        // SAFETY: constructed exactly once at creation (or clone), never
        // destructed elsewhere.
        unsafe { self.ty.destruct(self.data) };
        let size = self.ty.size();
        if size != 0 {
            let layout = Layout::from_size_align(size, self.ty.alignment())
                .expect("type layout overflows");
            // SAFETY: data came from alloc_zeroed_for with this layout.
            unsafe { alloc::dealloc(self.data, layout) };
        }
    }
}

/// Zeroed raw storage for one value of `ty`; dangling when the type is
/// zero-sized.
fn alloc_zeroed_for(ty: &TypeDescriptor) -> *mut u8 {
    let size = ty.size();
    if size == 0 {
        return ty.alignment() as *mut u8;
    }
    let layout =
        Layout::from_size_align(size, ty.alignment()).expect("type layout overflows");
    // SAFETY: layout has nonzero size.
    let ptr = unsafe { alloc::alloc_zeroed(layout) };
    if ptr.is_null() {
        alloc::handle_alloc_error(layout);
    }
    ptr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StructLayout;
    use crate::scalar::ScalarKind;

    #[test]
    fn test_struct_buffer_lifecycle() {
        let mut layout = StructLayout::new();
        layout.add_field("x", &TypeDescriptor::scalar(ScalarKind::F32));
        layout.add_field("label", &TypeDescriptor::scalar(ScalarKind::Text));
        let ty = TypeDescriptor::structure(layout);

        let mut buf = TypedBuffer::new(&ty);
        assert_eq!(buf.bytes().len(), ty.size());

        let view = buf.view().expect("struct type");
        // SAFETY: f32 and String are the registered representations.
        unsafe {
            *view.field_named::<f32>("x").expect("x") = 3.5;
            *view.field_named::<String>("label").expect("label") = "green".into();
            assert_eq!(*view.field_named::<f32>("x").expect("x"), 3.5);
        }
    }

    #[test]
    fn test_clone_is_deep() {
        let mut layout = StructLayout::new();
        layout.add_field("label", &TypeDescriptor::scalar(ScalarKind::Text));
        let ty = TypeDescriptor::structure(layout);

        let mut original = TypedBuffer::new(&ty);
        let view = original.view().expect("struct type");
        // SAFETY: String is the registered representation.
        unsafe {
            *view.field_named::<String>("label").expect("label") = "green".into();
        }

        let mut copy = original.clone();
        let copy_view = copy.view().expect("struct type");
        // SAFETY: as above.
        unsafe {
            assert_eq!(*copy_view.field_named::<String>("label").expect("label"), "green");
            *copy_view.field_named::<String>("label").expect("label") = "blue".into();
        }
        let view = original.view().expect("struct type");
        // SAFETY: as above.
        unsafe {
            assert_eq!(*view.field_named::<String>("label").expect("label"), "green");
        }
    }

    #[test]
    fn test_vec_buffer() {
        let ty = TypeDescriptor::vec_of(&TypeDescriptor::scalar(ScalarKind::F32));
        let mut buf = TypedBuffer::new(&ty);
        assert!(buf.view().is_none());

        let vec = buf.vec_mut().expect("vector type");
        vec.resize(4);
        // SAFETY: f32 elements.
        unsafe {
            *vec.index::<f32>(3).expect("in bounds") = 4.0;
            assert_eq!(*vec.index::<f32>(3).expect("in bounds"), 4.0);
        }
    }

    #[test]
    fn test_zero_sized_type() {
        let ty = TypeDescriptor::structure(StructLayout::new());
        let mut buf = TypedBuffer::new(&ty);
        assert!(buf.bytes().is_empty());
        assert!(buf.view().is_some());
    }
}
