pub mod editor;
pub mod owner;
pub mod pet;
