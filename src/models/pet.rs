use serde::{Deserialize, Serialize};

/// Pet record as produced by the caller's pet loader.
pub type Pet = serde_json::Value;

/// Pet category offered by the backend (dog, cat, ...).
///
/// `id` is kept as the raw json scalar the backend sent.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PetType {
    pub id: serde_json::Value,
    pub name: String,
}

/// Option shown in a select input.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SelectOption {
    pub value: serde_json::Value,
    pub name: String,
}

impl From<PetType> for SelectOption {
    fn from(val: PetType) -> Self {
        SelectOption {
            value: val.id,
            name: val.name,
        }
    }
}

/// Initial values of the "new pet" form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub id: Option<i64>,
    pub is_new: bool,
    pub name: String,
    pub birth_date: Option<String>,
    pub type_id: Option<serde_json::Value>,
}

impl Default for NewPet {
    fn default() -> Self {
        NewPet {
            id: None,
            is_new: true,
            name: String::new(),
            birth_date: None,
            type_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pet_type_keeps_numeric_and_string_ids() {
        let pet_types: Vec<PetType> =
            serde_json::from_value(json!([{"id": 1, "name": "cat"}, {"id": "2", "name": "dog"}]))
                .unwrap();

        assert_eq!(pet_types[0].id, json!(1));
        assert_eq!(pet_types[1].id, json!("2"));
    }

    #[test]
    fn test_pet_type_without_name_is_rejected() {
        let result = serde_json::from_value::<Vec<PetType>>(json!([{"id": 1}]));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_pet_serializes_with_form_field_names() {
        let value = serde_json::to_value(NewPet::default()).unwrap();

        assert_eq!(
            value,
            json!({"id": null, "isNew": true, "name": "", "birthDate": null, "typeId": null})
        );
    }
}
