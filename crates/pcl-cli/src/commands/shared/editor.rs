//! List, save, and delete flows shared by the course, internship, and
//! project commands.

use pcl_client::{ApiClient, DeletableResource, EditableResource, Receipt};
use pcl_core::CoreError;
use pcl_core::dashboard::filter::{Searchable, filter_by};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::course::ImageArgs;
use crate::commands::shared::confirm::confirm;
use crate::commands::shared::fetch::rows_or_empty;
use crate::context::AppContext;
use crate::output::{TableRow, output_list};
use crate::ui;

/// A catalog record managed from the admin dashboard.
pub trait CatalogRecord:
    EditableResource + DeletableResource + Searchable + Serialize + TableRow
{
    fn record_id(&self) -> i64;
    fn title(&self) -> &str;
}

macro_rules! catalog_record {
    ($ty:ty) => {
        impl CatalogRecord for $ty {
            fn record_id(&self) -> i64 {
                self.id
            }

            fn title(&self) -> &str {
                &self.title
            }
        }
    };
}

catalog_record!(pcl_core::entities::Course);
catalog_record!(pcl_core::entities::Internship);
catalog_record!(pcl_core::entities::Project);

/// A new upload wins over a URL; a URL replaces the stored one.
pub fn apply_image(
    image: &mut Option<std::path::PathBuf>,
    image_url: &mut String,
    args: &ImageArgs,
) {
    if let Some(url) = &args.image_url {
        image_url.clone_from(url);
    }
    if let Some(path) = &args.image {
        *image = Some(path.clone());
    }
}

/// Set `target` when a value was given on the command line.
pub fn set(target: &mut String, value: Option<&String>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

pub async fn list<T: CatalogRecord>(
    search: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.admin_client()?;
    let records = rows_or_empty(T::LABEL, client.fetch_all::<T>().await)?;
    let visible = filter_by(&records, search.unwrap_or_default(), |_| true);
    let limit = flags.row_limit(ctx.config.general.default_limit);
    output_list(&visible, limit, flags.format)
}

/// Fetch the full list and pick one record.
pub async fn find<T: CatalogRecord>(client: &ApiClient, id: i64) -> anyhow::Result<T> {
    client
        .fetch_all::<T>()
        .await?
        .into_iter()
        .find(|record| record.record_id() == id)
        .ok_or_else(|| {
            CoreError::NotFound {
                entity_type: <T as EditableResource>::NOUN.to_string(),
                id: id.to_string(),
            }
            .into()
        })
}

/// Create (`id == None`) or update a record, then print it from a fresh fetch.
pub async fn save<T: CatalogRecord>(
    client: &ApiClient,
    id: Option<i64>,
    draft: &T::Draft,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let receipt = client.save::<T>(id, draft).await?;
    let noun = <T as EditableResource>::NOUN;
    let verb = if id.is_some() { "updated" } else { "created" };
    ui::note(receipt.message().unwrap_or(&format!("{noun} {verb}")));
    show_saved::<T>(client, id.or_else(|| created_id(&receipt)), flags).await
}

fn created_id(receipt: &Receipt) -> Option<i64> {
    receipt.i64_field("id").or_else(|| {
        receipt
            .body()
            .values()
            .find_map(|value| value.get("id").and_then(serde_json::Value::as_i64))
    })
}

async fn show_saved<T: CatalogRecord>(
    client: &ApiClient,
    id: Option<i64>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let records = rows_or_empty(T::LABEL, client.fetch_all::<T>().await)?;
    let shown = records
        .iter()
        .filter(|record| id.is_none_or(|id| record.record_id() == id))
        .collect::<Vec<_>>();
    let limit = if id.is_some() { 1 } else { shown.len() };
    output_list(&shown, limit, flags.format)
}

pub async fn delete<T: CatalogRecord>(
    id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.admin_client()?;
    let record = find::<T>(&client, id).await?;
    let prompt = format!("Are you sure you want to delete \"{}\"?", record.title());
    if !confirm(&prompt, ctx.assume_yes(flags.yes))? {
        ui::note("cancelled");
        return Ok(());
    }

    let receipt = client.delete::<T>(id).await?;
    let noun = <T as DeletableResource>::NOUN;
    ui::note(receipt.message().unwrap_or(&format!("{noun} deleted")));

    let remaining = rows_or_empty(T::LABEL, client.fetch_all::<T>().await)?;
    let limit = flags.row_limit(ctx.config.general.default_limit);
    output_list(&remaining.iter().collect::<Vec<_>>(), limit, flags.format)
}
