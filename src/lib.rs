//! Solid-color placeholder icon generation, exposed as a library so the
//! integration tests can point it at a temporary directory.

pub mod icon_gen;
