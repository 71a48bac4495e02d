// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder for struct descriptors.

use crate::descriptor::TypeDescriptor;
use crate::layout::StructLayout;
use crate::scalar::ScalarKind;

/// Builder producing a struct [`TypeDescriptor`].
///
/// Sugar over [`StructLayout::add_field`]; introduces no layout semantics
/// of its own.
#[derive(Debug, Default)]
pub struct StructBuilder {
    layout: StructLayout,
}

impl StructBuilder {
    /// Start an empty struct.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: StructLayout::new(),
        }
    }

    /// Add a scalar field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, kind: ScalarKind) -> Self {
        self.layout.add_field(name, &TypeDescriptor::scalar(kind));
        self
    }

    /// Add a text field.
    #[must_use]
    pub fn text_field(self, name: impl Into<String>) -> Self {
        self.field(name, ScalarKind::Text)
    }

    /// Add a field of an existing descriptor (nested struct, vector, ...).
    /// The descriptor is cloned.
    #[must_use]
    pub fn field_with_type(mut self, name: impl Into<String>, ty: &TypeDescriptor) -> Self {
        self.layout.add_field(name, ty);
        self
    }

    /// Add a growable-vector field of `element` values.
    #[must_use]
    pub fn vec_field(mut self, name: impl Into<String>, element: &TypeDescriptor) -> Self {
        self.layout
            .add_field(name, &TypeDescriptor::vec_of(element));
        self
    }

    /// Finish the layout.
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::structure(self.layout)
    }
}
