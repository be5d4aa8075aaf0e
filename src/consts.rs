pub const PET_TYPES_PATH: &str = "api/pettypes";
pub const OWNERS_PATH: &str = "api/owners/";
pub const PETS_SUBPATH: &str = "pets";

pub const ACCEPT_JSON: &str = "application/json";
