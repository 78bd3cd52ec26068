//! Implementation of the submit commands: `alert`, `helpline`, `shelter`
//! and `volunteer`.
//!
//! Each fills an in-memory form from its arguments and runs the kind's
//! write path, so the backend sees exactly what the web form would send.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::adapters::{FormState, MemoryRegion};
use crate::application::{Alerts, CollectionSync, Helplines, RecordKind, SafeLocations, Volunteers};
use crate::cli::output::{output, CommandOutput};
use crate::cli::CliContext;
use crate::domain::models::{Availability, Severity};
use crate::domain::ports::DisplayRegion;

#[derive(Args, Debug)]
pub struct AlertArgs {
    /// Alert title
    #[arg(long)]
    pub title: String,

    /// Alert message
    #[arg(long)]
    pub message: String,

    /// Severity (low, medium, high, critical)
    #[arg(long, default_value = "medium")]
    pub severity: Severity,

    /// Affected location
    #[arg(long)]
    pub location: Option<String>,
}

impl AlertArgs {
    pub fn to_form(&self) -> FormState {
        let mut form = FormState::from_pairs([
            (Alerts::TITLE, self.title.as_str()),
            (Alerts::MESSAGE, self.message.as_str()),
            (Alerts::SEVERITY, self.severity.as_str()),
            (Alerts::LOCATION, ""),
        ]);
        form.set_opt(Alerts::LOCATION, self.location.as_deref());
        form
    }
}

#[derive(Args, Debug)]
pub struct HelplineArgs {
    /// Service name
    #[arg(long)]
    pub name: String,

    /// Phone number
    #[arg(long)]
    pub number: String,

    /// Category, e.g. medical, fire, rescue
    #[arg(long, default_value = "general")]
    pub category: String,

    /// Short description
    #[arg(long)]
    pub description: Option<String>,
}

impl HelplineArgs {
    pub fn to_form(&self) -> FormState {
        let mut form = FormState::from_pairs([
            (Helplines::NAME_FIELD, self.name.as_str()),
            (Helplines::NUMBER, self.number.as_str()),
            (Helplines::CATEGORY, self.category.as_str()),
            (Helplines::DESCRIPTION, ""),
        ]);
        form.set_opt(Helplines::DESCRIPTION, self.description.as_deref());
        form
    }
}

/// Numeric fields are taken as raw text; unparsable values fall back the
/// same way the web form does.
#[derive(Args, Debug)]
pub struct ShelterArgs {
    /// Location name
    #[arg(long)]
    pub name: String,

    /// Street address
    #[arg(long)]
    pub address: String,

    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<String>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<String>,

    /// Total capacity
    #[arg(long)]
    pub capacity: Option<String>,

    /// Current occupancy
    #[arg(long)]
    pub occupancy: Option<String>,

    /// Contact number
    #[arg(long)]
    pub contact: Option<String>,

    /// Comma-separated facilities, e.g. "Food, Water, WiFi"
    #[arg(long)]
    pub facilities: Option<String>,
}

impl ShelterArgs {
    pub fn to_form(&self) -> FormState {
        let mut form = FormState::from_pairs(SafeLocations::FIELDS.iter().map(|f| (*f, "")));
        form.set(SafeLocations::NAME_FIELD, self.name.as_str());
        form.set(SafeLocations::ADDRESS, self.address.as_str());
        form.set_opt(SafeLocations::LATITUDE, self.latitude.as_deref());
        form.set_opt(SafeLocations::LONGITUDE, self.longitude.as_deref());
        form.set_opt(SafeLocations::CAPACITY, self.capacity.as_deref());
        form.set_opt(SafeLocations::OCCUPANCY, self.occupancy.as_deref());
        form.set_opt(SafeLocations::CONTACT, self.contact.as_deref());
        form.set_opt(SafeLocations::FACILITIES, self.facilities.as_deref());
        form
    }
}

#[derive(Args, Debug)]
pub struct VolunteerArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Where you can help
    #[arg(long)]
    pub location: Option<String>,

    /// Comma-separated skills, e.g. "First Aid, Cooking"
    #[arg(long)]
    pub skills: Option<String>,

    /// Availability (available, limited, unavailable)
    #[arg(long, default_value = "available")]
    pub availability: Availability,
}

impl VolunteerArgs {
    pub fn to_form(&self) -> FormState {
        let mut form = FormState::from_pairs(Volunteers::FIELDS.iter().map(|f| (*f, "")));
        form.set(Volunteers::NAME_FIELD, self.name.as_str());
        form.set(Volunteers::EMAIL, self.email.as_str());
        form.set(Volunteers::PHONE, self.phone.as_str());
        form.set(Volunteers::AVAILABILITY, self.availability.as_str());
        form.set_opt(Volunteers::LOCATION, self.location.as_deref());
        form.set_opt(Volunteers::SKILLS, self.skills.as_deref());
        form
    }
}

/// Region state after a submit.
#[derive(Debug, Serialize)]
pub struct SubmitOutput {
    pub kind: &'static str,
    pub success: bool,
    pub notices: Vec<String>,
    pub html: String,
}

impl CommandOutput for SubmitOutput {
    fn to_human(&self) -> String {
        self.html.trim_end().to_string()
    }
}

pub async fn alert(args: AlertArgs, ctx: &CliContext, json_mode: bool) -> Result<()> {
    submit_kind::<Alerts>(ctx, args.to_form(), json_mode).await
}

pub async fn helpline(args: HelplineArgs, ctx: &CliContext, json_mode: bool) -> Result<()> {
    submit_kind::<Helplines>(ctx, args.to_form(), json_mode).await
}

pub async fn shelter(args: ShelterArgs, ctx: &CliContext, json_mode: bool) -> Result<()> {
    submit_kind::<SafeLocations>(ctx, args.to_form(), json_mode).await
}

pub async fn volunteer(args: VolunteerArgs, ctx: &CliContext, json_mode: bool) -> Result<()> {
    submit_kind::<Volunteers>(ctx, args.to_form(), json_mode).await
}

/// Run one kind's write path and print the region it leaves behind.
///
/// A rejected write is returned as an error after the region is printed.
pub async fn submit_kind<K: RecordKind>(
    ctx: &CliContext,
    mut form: FormState,
    json_mode: bool,
) -> Result<()> {
    let region = Arc::new(MemoryRegion::new());
    let sync = CollectionSync::<K>::new(
        Arc::clone(&ctx.api),
        Arc::clone(&region) as Arc<dyn DisplayRegion>,
        ctx.dismiss_after(),
    );

    let result = sync.submit(&mut form).await;

    let submit_output = SubmitOutput {
        kind: K::NAME,
        success: result.is_ok(),
        notices: region
            .notices()
            .await
            .into_iter()
            .map(|notice| notice.text)
            .collect(),
        html: region.render().await,
    };
    if result.is_ok() || !json_mode {
        output(&submit_output, json_mode);
    }
    result.map_err(anyhow::Error::from)
}
