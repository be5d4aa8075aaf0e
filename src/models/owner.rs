/// Owner record as returned by the backend, passed through untouched.
pub type Owner = serde_json::Value;
