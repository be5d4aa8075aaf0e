use super::{owner::Owner, pet::Pet, pet::SelectOption};
use serde::Serialize;

/// Everything the edit pet form needs to render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EditorViewModel<P = Pet> {
    pub pettypes: Vec<SelectOption>,
    pub owner: Owner,
    pub pet: P,
}
