// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime layout walkthrough.
//!
//! Demonstrates:
//! - Describing a two-float "vec2" struct at runtime
//! - Nesting structs and a text field into a "line" struct
//! - Writing fields through views and hex-dumping the raw buffers
//! - A growable vector of floats

use dynlay::{hex_encode, ScalarKind, StructBuilder, TypedBuffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== dynlay runtime layout example ===\n");

    // A two-float struct, described at runtime.
    let vec2 = StructBuilder::new()
        .field("x", ScalarKind::F32)
        .field("y", ScalarKind::F32)
        .build();
    println!(
        "[OK] vec2 layout: size={} alignment={}",
        vec2.size(),
        vec2.alignment()
    );

    let mut buf = TypedBuffer::new(&vec2);
    let view = buf.view().unwrap();
    // SAFETY: f32 is the representation registered for both fields.
    unsafe {
        *view.field::<f32>(0)? = 69.0;
        *view.field_named::<f32>("y")? = 42.0;
        println!(
            "[OK] vec2 value: x={} y={}",
            *view.field_named::<f32>("x")?,
            *view.field::<f32>(1)?
        );
    }
    println!("     raw bytes: {}\n", hex_encode(buf.bytes()));

    // Structs nest: a line has two vec2 endpoints and an owned text color.
    let line = StructBuilder::new()
        .field_with_type("start", &vec2)
        .field_with_type("end", &vec2)
        .text_field("color")
        .build();
    println!(
        "[OK] line layout: size={} alignment={}",
        line.size(),
        line.alignment()
    );

    let mut line_buf = TypedBuffer::new(&line);
    let line_view = line_buf.view().unwrap();
    let vec2_layout = vec2.as_struct().unwrap();
    // SAFETY: start/end hold constructed vec2 values at the reported
    // offsets; f32/String match the registered kinds.
    unsafe {
        let start = vec2_layout.view(line_view.field_ptr_named("start")?);
        *start.field_named::<f32>("x")? = 12.0;
        *start.field_named::<f32>("y")? = 13.0;

        let end = vec2_layout.view(line_view.field_ptr_named("end")?);
        *end.field_named::<f32>("x")? = 20.0;
        *end.field_named::<f32>("y")? = 21.0;

        *line_view.field_named::<String>("color")? = "green".into();
        println!(
            "[OK] line value: start=({}, {}) end=({}, {}) color={:?}",
            *start.field_named::<f32>("x")?,
            *start.field_named::<f32>("y")?,
            *end.field_named::<f32>("x")?,
            *end.field_named::<f32>("y")?,
            *line_view.field_named::<String>("color")?,
        );
    }
    // The text field owns heap storage, so the dump shows its control
    // block (pointer/length/capacity), not the characters.
    println!("     raw bytes: {}\n", hex_encode(line_buf.bytes()));

    // A growable vector of floats, resized then filled by index.
    let numbers = dynlay::TypeDescriptor::vec_of(&dynlay::TypeDescriptor::scalar(ScalarKind::F32));
    let mut numbers_buf = TypedBuffer::new(&numbers);
    let list = numbers_buf.vec_mut().unwrap();
    list.resize(4);
    // SAFETY: f32 elements.
    unsafe {
        for i in 0..4 {
            *list.index::<f32>(i)? = (i + 1) as f32;
        }
        print!("[OK] vector of {} floats:", list.len());
        for i in 0..list.len() {
            print!(" {}", *list.index::<f32>(i)?);
        }
        println!();
    }

    // Buffers destruct and release their memory when they drop.
    Ok(())
}
