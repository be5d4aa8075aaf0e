//! # Pet Editor API Module
//!
//! Builds the data the edit pet form renders from: the pet type options,
//! the owner and the pet being edited (or a blank one for a new pet).

use crate::{
    consts,
    errors::EditorError,
    models::{
        editor::EditorViewModel,
        owner::Owner,
        pet::{NewPet, Pet, PetType, SelectOption},
    },
    services, utils,
    utils::OwnerIdEncoding,
};
use anyhow::Context;
use log::{debug, warn};
use std::future::Future;

/// Maps pet types to select options, one per pet type and in the same order.
pub fn to_select_options(pet_types: Vec<PetType>) -> Vec<SelectOption> {
    pet_types.into_iter().map(SelectOption::from).collect()
}

async fn fetch_pet_type_options(
    requester: &services::ImplApiRequester,
) -> anyhow::Result<Vec<SelectOption>> {
    let body = requester.request_json(consts::PET_TYPES_PATH).await?;
    let pet_types: Vec<PetType> =
        serde_json::from_value(body).context("unexpected pet types response")?;

    Ok(to_select_options(pet_types))
}

async fn fetch_owner(
    owner_id: &str,
    requester: &services::ImplApiRequester,
    encoding: OwnerIdEncoding,
) -> anyhow::Result<Owner> {
    requester
        .request_json(&utils::owner_path(owner_id, encoding))
        .await
}

/// Loads everything the edit pet form needs.
///
/// Pet types and the owner are requested concurrently while `pet_loader`,
/// which is created and owned by the caller, is awaited alongside them.
/// The loader never starts a pet request of its own.
///
/// # Arguments
/// * `owner_id` - Owner whose pet is edited, placed in the path according to `encoding`
/// * `pet_loader` - Pending pet load
/// * `requester` - Client used for the pet types and owner requests
/// * `encoding` - How `owner_id` is written into the owner path
///
/// # Errors
/// Returns [`EditorError::LoadFailed`] with the first branch error as soon as
/// any of the three branches fails. The remaining branches are dropped.
pub async fn load_pet_editor_model<P, F>(
    owner_id: &str,
    pet_loader: F,
    requester: &services::ImplApiRequester,
    encoding: OwnerIdEncoding,
) -> Result<EditorViewModel<P>, EditorError>
where
    F: Future<Output = anyhow::Result<P>>,
{
    debug!("loading pet editor model for owner {owner_id}");

    let (pettypes, owner, pet) = futures::try_join!(
        fetch_pet_type_options(requester),
        fetch_owner(owner_id, requester, encoding),
        pet_loader,
    )
    .map_err(|err| {
        warn!("pet editor model for owner {owner_id} failed: {err:#}");
        EditorError::LoadFailed(err)
    })?;

    Ok(EditorViewModel {
        pettypes,
        owner,
        pet,
    })
}

/// Fetches an existing pet of the owner, to be used as the pet loader of the
/// edit form.
pub async fn load_pet_for_edit(
    owner_id: &str,
    pet_id: &str,
    requester: &services::ImplApiRequester,
    encoding: OwnerIdEncoding,
) -> anyhow::Result<Pet> {
    requester
        .request_json(&utils::pet_path(owner_id, pet_id, encoding))
        .await
}

/// Blank pet the new pet form starts from.
pub async fn new_pet_template() -> anyhow::Result<Pet> {
    Ok(serde_json::to_value(NewPet::default())?)
}
