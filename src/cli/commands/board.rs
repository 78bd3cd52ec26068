//! Implementation of the `reliefhub board` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde::Serialize;

use crate::adapters::MemoryRegion;
use crate::application::{BoardRegions, BoardReport, ReliefBoard};
use crate::cli::output::{output, CommandOutput};
use crate::cli::CliContext;
use crate::domain::errors::SyncResult;
use crate::domain::ports::DisplayRegion;
use crate::render::{render_page, PageSection};

/// Page title used for `--out`.
const PAGE_TITLE: &str = "Disaster Relief Board";

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Write a standalone HTML page instead of printing the regions
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// One region of the loaded board.
#[derive(Debug, Serialize)]
pub struct RegionOutput {
    pub kind: &'static str,
    pub title: &'static str,
    #[serde(skip)]
    pub list_id: &'static str,
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct BoardOutput {
    pub regions: Vec<RegionOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<PathBuf>,
}

impl CommandOutput for BoardOutput {
    fn to_human(&self) -> String {
        if let Some(path) = &self.written_to {
            let failed = self.regions.iter().filter(|r| !r.loaded).count();
            return format!(
                "Board written to {} ({} of {} regions loaded)",
                path.display(),
                self.regions.len() - failed,
                self.regions.len()
            );
        }
        self.regions
            .iter()
            .map(|region| {
                let header = if region.loaded {
                    style(region.title).bold().to_string()
                } else {
                    style(region.title).red().bold().to_string()
                };
                format!("{header}\n{}", region.html.trim_end())
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

pub async fn execute(args: BoardArgs, ctx: &CliContext, json_mode: bool) -> Result<()> {
    let mut board = load_board(ctx).await;

    if let Some(path) = args.out {
        let sections: Vec<PageSection<'_>> = board
            .regions
            .iter()
            .map(|region| PageSection {
                list_id: region.list_id,
                title: region.title,
                html: &region.html,
            })
            .collect();
        let page = render_page(PAGE_TITLE, &sections);
        tokio::fs::write(&path, page)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        board.written_to = Some(path);
    }

    output(&board, json_mode);
    Ok(())
}

/// Initialise the board on in-memory regions and load every collection.
pub async fn load_board(ctx: &CliContext) -> BoardOutput {
    let alerts = Arc::new(MemoryRegion::new());
    let helplines = Arc::new(MemoryRegion::new());
    let safe_locations = Arc::new(MemoryRegion::new());
    let volunteers = Arc::new(MemoryRegion::new());

    let board = ReliefBoard::init(
        Arc::clone(&ctx.api),
        BoardRegions {
            alerts: Arc::clone(&alerts) as Arc<dyn DisplayRegion>,
            helplines: Arc::clone(&helplines) as Arc<dyn DisplayRegion>,
            safe_locations: Arc::clone(&safe_locations) as Arc<dyn DisplayRegion>,
            volunteers: Arc::clone(&volunteers) as Arc<dyn DisplayRegion>,
        },
        ctx.dismiss_after(),
    );
    let BoardReport {
        alerts: alerts_result,
        helplines: helplines_result,
        safe_locations: safe_locations_result,
        volunteers: volunteers_result,
    } = board.load_all().await;

    let regions = vec![
        region_output("alerts", "Alerts", "alertsList", &alerts_result, &alerts).await,
        region_output("helplines", "Helplines", "helplinesList", &helplines_result, &helplines)
            .await,
        region_output(
            "safe-locations",
            "Safe Locations",
            "locationsList",
            &safe_locations_result,
            &safe_locations,
        )
        .await,
        region_output(
            "volunteers",
            "Volunteers",
            "volunteersList",
            &volunteers_result,
            &volunteers,
        )
        .await,
    ];

    BoardOutput {
        regions,
        written_to: None,
    }
}

async fn region_output(
    kind: &'static str,
    title: &'static str,
    list_id: &'static str,
    result: &SyncResult<usize>,
    region: &MemoryRegion,
) -> RegionOutput {
    RegionOutput {
        kind,
        title,
        list_id,
        loaded: result.is_ok(),
        count: result.as_ref().ok().copied(),
        error: result.as_ref().err().map(ToString::to_string),
        html: region.render().await,
    }
}
