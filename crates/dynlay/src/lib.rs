// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # dynlay - runtime type descriptions over raw memory
//!
//! Build composite data layouts (structs, growable vectors, scalars) at
//! runtime rather than at compile time, then construct, copy, and destroy
//! values in raw memory according to the description.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynlay::{ScalarKind, StructBuilder, TypedBuffer};
//!
//! // Describe a struct at runtime; registration fixes the layout.
//! let vec2 = StructBuilder::new()
//!     .field("x", ScalarKind::F32)
//!     .field("y", ScalarKind::F32)
//!     .build();
//! assert_eq!(vec2.size(), 8);
//! assert_eq!(vec2.alignment(), 4);
//!
//! // Acquire a constructed value and write fields through a view.
//! let mut buf = TypedBuffer::new(&vec2);
//! let view = buf.view().expect("struct type");
//! // SAFETY: f32 is the representation registered for both fields.
//! unsafe {
//!     *view.field_named::<f32>("x").unwrap() = 69.0;
//!     *view.field_named::<f32>("y").unwrap() = 42.0;
//!     assert_eq!(*view.field::<f32>(0).unwrap(), 69.0);
//! }
//! // Dropping the buffer destructs the value and releases the memory.
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +----------------------------------------------------------------+
//! |                        Accessor Layer                          |
//! |        StructView (field_ptr / field<T>)  |  VecData::index    |
//! +----------------------------------------------------------------+
//! |                       Descriptor Layer                         |
//! |   TypeDescriptor = Scalar(ScalarKind)                          |
//! |                  | Struct(StructLayout)                        |
//! |                  | Vec(VecType)                                |
//! +----------------------------------------------------------------+
//! |                        Storage Layer                           |
//! |   caller buffers (unsafe construct/destruct/copy_data)         |
//! |   TypedBuffer (scoped acquisition)  |  VecData (owned buffer)  |
//! +----------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TypeDescriptor`] | How to size, align, construct, destruct, copy a type |
//! | [`StructLayout`] | Append-only named fields with computed offsets |
//! | [`StructView`] | Non-owning typed accessor over one struct buffer |
//! | [`VecData`] | Type-erased growable vector (control block + buffer) |
//! | [`TypedBuffer`] | RAII owner of one constructed value |
//!
//! ## Memory discipline
//!
//! Every raw buffer must be constructed exactly once after allocation and
//! destructed exactly once before release; the `unsafe` entry points trust
//! the caller for buffer size, alignment, and construct/destruct pairing.
//! [`TypedBuffer`] brackets that lifecycle by scope. There is no internal
//! locking and no sharing: descriptors, layouts, and vectors own their
//! children exclusively, and copying is always a deep copy.

/// Scoped acquisition of constructed values (allocate/construct/drop).
pub mod buffer;
/// Fluent builder for struct descriptors.
pub mod builder;
/// The type-descriptor contract (size, alignment, value lifecycle).
pub mod descriptor;
/// Struct layout engine (field registration, offset computation).
pub mod layout;
/// Scalar value kinds.
pub mod scalar;
/// Alignment math and hex rendering helpers.
pub mod util;
/// Type-erased growable vectors.
pub mod vector;
/// Non-owning field accessors over struct buffers.
pub mod view;

pub use buffer::TypedBuffer;
pub use builder::StructBuilder;
pub use descriptor::{AccessError, TypeDescriptor, TypeKind};
pub use layout::{Field, StructLayout};
pub use scalar::ScalarKind;
pub use util::hex_encode;
pub use vector::{VecData, VecType};
pub use view::StructView;
