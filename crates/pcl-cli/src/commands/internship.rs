use pcl_core::drafts::InternshipDraft;
use pcl_core::entities::Internship;
use pcl_core::enums::InternshipType;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InternshipCommands;
use crate::cli::subcommands::internship::InternshipFields;
use crate::commands::shared::editor::{self, apply_image, set};
use crate::commands::shared::list_edit::edit_list;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;

/// Handle `pcl internship <subcommand>`.
pub async fn handle(
    action: &InternshipCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InternshipCommands::List { search } => {
            editor::list::<Internship>(search.as_deref(), ctx, flags).await
        }
        InternshipCommands::Create(fields) => {
            let mut draft = InternshipDraft::default();
            apply_fields(&mut draft, fields)?;
            let client = ctx.admin_client()?;
            editor::save::<Internship>(&client, None, &draft, flags).await
        }
        InternshipCommands::Update { id, fields } => {
            let client = ctx.admin_client()?;
            let internship = editor::find::<Internship>(&client, *id).await?;
            let mut draft = InternshipDraft::from(&internship);
            apply_fields(&mut draft, fields)?;
            editor::save::<Internship>(&client, Some(*id), &draft, flags).await
        }
        InternshipCommands::Delete { id } => {
            editor::delete::<Internship>(*id, ctx, flags).await
        }
    }
}

fn apply_fields(draft: &mut InternshipDraft, fields: &InternshipFields) -> anyhow::Result<()> {
    set(&mut draft.title, fields.title.as_ref());
    set(&mut draft.description, fields.description.as_ref());
    set(&mut draft.detailed_description, fields.detailed_description.as_ref());
    set(&mut draft.category, fields.category.as_ref());
    set(&mut draft.duration, fields.duration.as_ref());
    set(&mut draft.location, fields.location.as_ref());
    set(&mut draft.eligibility, fields.eligibility.as_ref());
    if let Some(kind) =
        parse_optional::<InternshipType>(fields.internship_type.as_deref(), "internship type")?
    {
        draft.internship_type = kind;
    }
    if let Some(active) = fields.active {
        draft.is_active = active;
    }

    edit_list(
        &mut draft.skills,
        &fields.add_skills,
        &fields.remove_skills,
        fields.skills_file.as_deref(),
    )?;
    edit_list(
        &mut draft.perks,
        &fields.add_perks,
        &fields.remove_perks,
        fields.perks_file.as_deref(),
    )?;
    apply_image(&mut draft.image, &mut draft.image_url, &fields.image);
    Ok(())
}
