//! # API Module
//!
//! Business logic of the pet editor.
//!
//! ## Modules
//!
//! - [`pet_editor`] - Edit pet form model loading
pub mod pet_editor;
