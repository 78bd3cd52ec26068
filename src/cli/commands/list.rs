//! Implementation of the `reliefhub list` command.

use anyhow::{Context, Result};
use clap::Args;

use crate::application::{
    fetch_records, Alerts, Helplines, RecordKind, SafeLocations, Volunteers,
};
use crate::cli::display::{render_list, rows_table};
use crate::cli::{CliContext, KindArg};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Collection to list
    #[arg(value_enum)]
    pub kind: KindArg,
}

pub async fn execute(args: ListArgs, ctx: &CliContext, json_mode: bool) -> Result<()> {
    let text = match args.kind {
        KindArg::Alerts => list_kind::<Alerts>(ctx, json_mode).await?,
        KindArg::Helplines => list_kind::<Helplines>(ctx, json_mode).await?,
        KindArg::SafeLocations => list_kind::<SafeLocations>(ctx, json_mode).await?,
        KindArg::Volunteers => list_kind::<Volunteers>(ctx, json_mode).await?,
    };
    println!("{text}");
    Ok(())
}

/// Fetch one collection and format it as a table, or as JSON records.
pub async fn list_kind<K: RecordKind>(ctx: &CliContext, json_mode: bool) -> Result<String> {
    let records = fetch_records::<K>(ctx.api.as_ref())
        .await
        .with_context(|| format!("Failed to list {}", K::NAME))?;

    if json_mode {
        return Ok(serde_json::to_string_pretty(&records)?);
    }

    let table = rows_table(K::COLUMNS, records.iter().map(K::summary));
    Ok(render_list(K::NAME, &table, records.len(), K::MESSAGES.empty))
}
