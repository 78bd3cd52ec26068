//! Implementation of the `reliefhub seed` command.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::application::{seed_all, SeedOutcome};
use crate::cli::output::{fail_line, ok_line, output, CommandOutput};
use crate::cli::CliContext;

#[derive(Debug, Serialize)]
pub struct SeedEntry {
    pub kind: &'static str,
    #[serde(flatten)]
    pub outcome: Option<SeedOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SeedOutput {
    pub success: bool,
    pub collections: Vec<SeedEntry>,
}

impl CommandOutput for SeedOutput {
    fn to_human(&self) -> String {
        self.collections
            .iter()
            .map(|entry| match (&entry.outcome, &entry.error) {
                (Some(SeedOutcome::Inserted { count }), _) => {
                    ok_line(&format!("{}: inserted {count} sample record(s)", entry.kind))
                }
                (Some(SeedOutcome::Skipped { existing }), _) => ok_line(&format!(
                    "{}: already has {existing} record(s), skipped",
                    entry.kind
                )),
                (None, error) => fail_line(&format!(
                    "{}: {}",
                    entry.kind,
                    error.as_deref().unwrap_or("failed")
                )),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub async fn execute(ctx: &CliContext, json_mode: bool) -> Result<()> {
    let collections: Vec<SeedEntry> = seed_all(ctx.api.as_ref())
        .await
        .into_iter()
        .map(|(kind, result)| match result {
            Ok(outcome) => SeedEntry {
                kind,
                outcome: Some(outcome),
                error: None,
            },
            Err(err) => SeedEntry {
                kind,
                outcome: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    let failed = collections.iter().filter(|e| e.error.is_some()).count();
    output(
        &SeedOutput {
            success: failed == 0,
            collections,
        },
        json_mode,
    );
    if failed > 0 {
        bail!("{failed} collection(s) could not be seeded");
    }
    Ok(())
}
