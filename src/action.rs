use clap::{Args, Parser, Subcommand};

use crate::{api, config, services, utils::OwnerIdEncoding};
use anyhow::Context;
use std::io::{self, Write};

#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Owner of the pet
    #[arg(short, long)]
    owner_id: String,

    /// Pet to edit, a blank pet is used when missing
    #[arg(short, long)]
    pet_id: Option<String>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Action {
    /// Loads the edit pet form model and prints it as json
    Load(LoadArgs),
}

/// Loads the data behind the pet clinic edit pet form
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct AppArgs {
    #[command(subcommand)]
    pub action: Action,
}

impl AppArgs {
    pub async fn run(&self) -> anyhow::Result<()> {
        match &self.action {
            Action::Load(LoadArgs { owner_id, pet_id }) => {
                let app_config = config::APP_CONFIG
                    .get()
                    .context("failed to get app config")?;
                let encoding = app_config.owner_id_encoding()?;
                let requester: services::ImplApiRequester =
                    Box::new(services::http::HttpRequester::from_config()?);

                write_editor_model(
                    owner_id,
                    pet_id.as_deref(),
                    &requester,
                    encoding,
                    &mut io::stdout().lock(),
                )
                .await
            }
        }
    }
}

/// Loads the editor model and writes it to `out` as pretty json.
///
/// `out` only ever receives the json document, logs go to stderr.
async fn write_editor_model<W: Write>(
    owner_id: &str,
    pet_id: Option<&str>,
    requester: &services::ImplApiRequester,
    encoding: OwnerIdEncoding,
    out: &mut W,
) -> anyhow::Result<()> {
    let view_model = match pet_id {
        Some(pet_id) => {
            api::pet_editor::load_pet_editor_model(
                owner_id,
                api::pet_editor::load_pet_for_edit(owner_id, pet_id, requester, encoding),
                requester,
                encoding,
            )
            .await?
        }
        None => {
            api::pet_editor::load_pet_editor_model(
                owner_id,
                api::pet_editor::new_pet_template(),
                requester,
                encoding,
            )
            .await?
        }
    };

    serde_json::to_writer_pretty(&mut *out, &view_model)?;
    writeln!(out)?;
    Ok(())
}
