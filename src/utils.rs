//! Helper functions to build backend urls and resource paths.

use crate::consts;
use anyhow::bail;
use derive_more::Display;
use std::str::FromStr;

/// How an owner id is written into the owner resource path.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq)]
pub enum OwnerIdEncoding {
    /// Appended as given, the caller supplies a path-safe id
    #[default]
    #[display("raw")]
    Raw,
    /// Percent-encoded as a single path segment
    #[display("segment")]
    Segment,
}

impl FromStr for OwnerIdEncoding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(OwnerIdEncoding::Raw),
            "segment" => Ok(OwnerIdEncoding::Segment),
            other => bail!("unknown owner id encoding: {other}"),
        }
    }
}

/// Joins a relative api path to the backend base url with a single `/`.
pub fn url(base_url: &str, path: &str) -> String {
    format!(
        "{base}/{path}",
        base = base_url.trim_end_matches('/'),
        path = path.trim_start_matches('/')
    )
}

/// Path of the owner resource, e.g. `api/owners/42`.
pub fn owner_path(owner_id: &str, encoding: OwnerIdEncoding) -> String {
    match encoding {
        OwnerIdEncoding::Raw => format!("{}{owner_id}", consts::OWNERS_PATH),
        OwnerIdEncoding::Segment => {
            format!("{}{}", consts::OWNERS_PATH, urlencoding::encode(owner_id))
        }
    }
}

/// Path of a pet owned by `owner_id`, e.g. `api/owners/42/pets/7`.
pub fn pet_path(owner_id: &str, pet_id: &str, encoding: OwnerIdEncoding) -> String {
    let pet_id = match encoding {
        OwnerIdEncoding::Raw => pet_id.to_string(),
        OwnerIdEncoding::Segment => urlencoding::encode(pet_id).into_owned(),
    };

    format!(
        "{owner}/{pets}/{pet_id}",
        owner = owner_path(owner_id, encoding),
        pets = consts::PETS_SUBPATH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_with_single_slash() {
        assert_eq!(
            url("http://localhost:9966/petclinic/", "api/pettypes"),
            "http://localhost:9966/petclinic/api/pettypes"
        );
        assert_eq!(
            url("http://localhost:9966/petclinic", "/api/pettypes"),
            "http://localhost:9966/petclinic/api/pettypes"
        );
    }

    #[test]
    fn test_raw_owner_path_is_literal_concatenation() {
        for owner_id in ["42", "a b", "../../admin", "x?y=1#z", "ñandú/7", ""] {
            assert_eq!(
                owner_path(owner_id, OwnerIdEncoding::Raw),
                format!("api/owners/{owner_id}")
            );
        }
    }

    #[test]
    fn test_segment_owner_path_escapes_reserved_chars() {
        assert_eq!(
            owner_path("a b/../c?d", OwnerIdEncoding::Segment),
            "api/owners/a%20b%2F..%2Fc%3Fd"
        );
        assert_eq!(owner_path("42", OwnerIdEncoding::Segment), "api/owners/42");
    }

    #[test]
    fn test_pet_path() {
        assert_eq!(
            pet_path("42", "7", OwnerIdEncoding::Raw),
            "api/owners/42/pets/7"
        );
        assert_eq!(
            pet_path("4 2", "7/1", OwnerIdEncoding::Segment),
            "api/owners/4%202/pets/7%2F1"
        );
    }

    #[test]
    fn test_owner_id_encoding_from_str() {
        assert_eq!(
            " Segment ".parse::<OwnerIdEncoding>().unwrap(),
            OwnerIdEncoding::Segment
        );
        assert_eq!("raw".parse::<OwnerIdEncoding>().unwrap(), OwnerIdEncoding::Raw);
        assert!("utf8".parse::<OwnerIdEncoding>().is_err());
        assert_eq!(OwnerIdEncoding::default().to_string(), "raw");
    }
}
