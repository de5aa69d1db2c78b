use pcl_client::{ApiClient, CatalogResource};
use pcl_core::catalog::{CourseQuery, InternshipQuery, ProjectQuery, categories};
use pcl_core::entities::{Course, Internship, Project};
use pcl_core::enums::{InternshipType, StatusFilter};
use pcl_core::media::{MediaKind, resolve_media_url};
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::cli::subcommands::catalog::CatalogKind;
use crate::commands::shared::fetch::rows_or_empty;
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::{output, output_list};
use crate::progress::with_spinner;

#[derive(Serialize)]
struct CategoriesResponse {
    kind: &'static str,
    categories: Vec<String>,
}

/// Handle `pcl catalog <subcommand>`. Public endpoints; no session needed.
pub async fn handle(
    action: &CatalogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = flags.row_limit(ctx.config.general.default_limit);
    match action {
        CatalogCommands::Courses(args) => {
            let courses = fetch::<Course>(&ctx.client).await?;
            let query = CourseQuery {
                search: args.search.clone().unwrap_or_default(),
                category: args.category.clone(),
                level: args.level.clone(),
            };
            output_list(&query.apply(&courses), limit, flags.format)
        }
        CatalogCommands::Internships(args) => {
            let internships = fetch::<Internship>(&ctx.client).await?;
            let query = InternshipQuery {
                search: args.search.clone().unwrap_or_default(),
                internship_type: parse_value::<StatusFilter<InternshipType>>(
                    &args.internship_type,
                    "internship type",
                )?,
            };
            output_list(&query.apply(&internships), limit, flags.format)
        }
        CatalogCommands::Projects(args) => {
            let projects = fetch::<Project>(&ctx.client).await?;
            let query = ProjectQuery {
                search: args.search.clone().unwrap_or_default(),
                category: args.category.clone(),
                difficulty: args.difficulty.clone(),
            };
            output_list(&query.apply(&projects), limit, flags.format)
        }
        CatalogCommands::Categories { kind } => {
            let categories = match kind {
                CatalogKind::Course => {
                    let courses = fetch::<Course>(&ctx.client).await?;
                    categories(courses.iter().map(|c| c.category.as_deref()))
                }
                CatalogKind::Internship => {
                    let internships = fetch::<Internship>(&ctx.client).await?;
                    categories(internships.iter().map(|i| i.category.as_deref()))
                }
                CatalogKind::Project => {
                    let projects = fetch::<Project>(&ctx.client).await?;
                    categories(projects.iter().map(|p| p.category.as_deref()))
                }
            };
            output(
                &CategoriesResponse {
                    kind: kind_name(*kind),
                    categories,
                },
                flags.format,
            )
        }
        CatalogCommands::Show { kind, slug } => {
            let client = &ctx.client;
            let detail = match kind {
                CatalogKind::Course => {
                    with_image(&client.get_catalog::<Course>(slug).await?, client, MediaKind::Courses)?
                }
                CatalogKind::Internship => with_image(
                    &client.get_catalog::<Internship>(slug).await?,
                    client,
                    MediaKind::Internships,
                )?,
                CatalogKind::Project => with_image(
                    &client.get_catalog::<Project>(slug).await?,
                    client,
                    MediaKind::Projects,
                )?,
            };
            output(&detail, flags.format)
        }
    }
}

async fn fetch<T: CatalogResource>(client: &ApiClient) -> anyhow::Result<Vec<T>> {
    let message = format!("Loading {}...", T::PATH);
    let result = with_spinner(&message, "request failed", client.list_catalog::<T>()).await;
    Ok(rows_or_empty(T::PATH, result)?)
}

const fn kind_name(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Course => "courses",
        CatalogKind::Internship => "internships",
        CatalogKind::Project => "projects",
    }
}

/// The record as JSON plus an absolute `image` URL (null when there is none).
fn with_image<T: Serialize>(record: &T, client: &ApiClient, kind: MediaKind) -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut value {
        let stored = map.get("image_url").and_then(Value::as_str);
        let resolved = resolve_media_url(client.base_url(), kind, stored);
        map.insert("image".to_string(), resolved.map_or(Value::Null, Value::String));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pcl_config::ApiConfig;
    use serde_json::json;

    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "https://api.pclinfotech.test".into(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn bare_file_names_resolve_under_uploads() {
        let course: Course = serde_json::from_value(json!({
            "id": 1, "title": "Python", "slug": "python", "image_url": "python.png"
        }))
        .unwrap();
        let detail = with_image(&course, &client(), MediaKind::Courses).unwrap();
        assert_eq!(
            detail["image"],
            "https://api.pclinfotech.test/uploads/courses/python.png"
        );
        assert_eq!(detail["slug"], "python");
    }

    #[test]
    fn missing_image_is_null() {
        let project: Project =
            serde_json::from_value(json!({"id": 2, "title": "Chat App", "slug": "chat"})).unwrap();
        let detail = with_image(&project, &client(), MediaKind::Projects).unwrap();
        assert!(detail["image"].is_null());
    }
}
