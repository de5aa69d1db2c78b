use pcl_core::drafts::ProjectDraft;
use pcl_core::entities::Project;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::cli::subcommands::project::ProjectFields;
use crate::commands::shared::editor::{self, apply_image, set};
use crate::commands::shared::list_edit::edit_list;
use crate::context::AppContext;

/// Handle `pcl project <subcommand>`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List { search } => {
            editor::list::<Project>(search.as_deref(), ctx, flags).await
        }
        ProjectCommands::Create(fields) => {
            let mut draft = ProjectDraft::default();
            apply_fields(&mut draft, fields)?;
            let client = ctx.admin_client()?;
            editor::save::<Project>(&client, None, &draft, flags).await
        }
        ProjectCommands::Update { id, fields } => {
            let client = ctx.admin_client()?;
            let project = editor::find::<Project>(&client, *id).await?;
            let mut draft = ProjectDraft::from(&project);
            apply_fields(&mut draft, fields)?;
            editor::save::<Project>(&client, Some(*id), &draft, flags).await
        }
        ProjectCommands::Delete { id } => editor::delete::<Project>(*id, ctx, flags).await,
    }
}

fn apply_fields(draft: &mut ProjectDraft, fields: &ProjectFields) -> anyhow::Result<()> {
    set(&mut draft.title, fields.title.as_ref());
    set(&mut draft.description, fields.description.as_ref());
    set(&mut draft.detailed_description, fields.detailed_description.as_ref());
    set(&mut draft.category, fields.category.as_ref());
    set(&mut draft.duration, fields.duration.as_ref());
    set(&mut draft.project_type, fields.project_type.as_ref());
    set(&mut draft.difficulty_level, fields.difficulty_level.as_ref());
    set(&mut draft.project_code, fields.project_code.as_ref());
    set(&mut draft.price, fields.price.as_ref());
    set(&mut draft.original_price, fields.original_price.as_ref());
    set(&mut draft.course_fees, fields.course_fees.as_ref());
    set(&mut draft.total_amount, fields.total_amount.as_ref());
    set(&mut draft.discount, fields.discount.as_ref());
    set(&mut draft.level, fields.level.as_ref());
    set(&mut draft.rating, fields.rating.as_ref());
    set(&mut draft.students_count, fields.students_count.as_ref());

    edit_list(
        &mut draft.technologies,
        &fields.add_technologies,
        &fields.remove_technologies,
        fields.technologies_file.as_deref(),
    )?;
    edit_list(
        &mut draft.prerequisites,
        &fields.add_prerequisites,
        &fields.remove_prerequisites,
        fields.prerequisites_file.as_deref(),
    )?;
    edit_list(
        &mut draft.learning_outcomes,
        &fields.add_outcomes,
        &fields.remove_outcomes,
        fields.outcomes_file.as_deref(),
    )?;
    apply_image(&mut draft.image, &mut draft.image_url, &fields.image);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn update_edits_each_list_independently() {
        let project: Project = serde_json::from_value(json!({
            "id": 9, "title": "E-commerce Platform", "slug": "e-commerce",
            "technologies": ["React", "Node.js"],
            "prerequisites": ["JavaScript"],
            "learning_outcomes": null,
            "rating": 4.7
        }))
        .unwrap();
        let mut draft = ProjectDraft::from(&project);
        let fields = ProjectFields {
            add_technologies: vec!["MongoDB".into()],
            remove_prerequisites: vec![1],
            add_outcomes: vec!["Deploy a full-stack app".into()],
            ..ProjectFields::default()
        };
        apply_fields(&mut draft, &fields).unwrap();
        assert_eq!(draft.technologies, vec!["React", "Node.js", "MongoDB"]);
        assert!(draft.prerequisites.is_empty());
        assert_eq!(draft.learning_outcomes, vec!["Deploy a full-stack app"]);
        assert_eq!(draft.rating, "4.7");
        assert_eq!(draft.title, "E-commerce Platform");
    }

    #[test]
    fn blank_title_fails_before_any_request() {
        let mut draft = ProjectDraft::default();
        apply_fields(&mut draft, &ProjectFields::default()).unwrap();
        assert!(draft.to_payload().is_err());
    }
}
