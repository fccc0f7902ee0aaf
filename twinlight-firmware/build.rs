// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    let memory = fs::read_to_string(manifest_dir.join("memory.x")).expect("Failed to read memory.x");
    fs::write(out_dir.join("memory.x"), memory).expect("Failed to write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!(
        "cargo:rerun-if-changed={}",
        manifest_dir.join("memory.x").display()
    );
    println!("cargo:rerun-if-changed=build.rs");
}
