use pcl_core::drafts::CourseDraft;
use pcl_core::entities::Course;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::cli::subcommands::course::CourseFields;
use crate::commands::shared::editor::{self, apply_image, set};
use crate::commands::shared::list_edit::edit_list;
use crate::context::AppContext;

/// Handle `pcl course <subcommand>`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::List { search } => {
            editor::list::<Course>(search.as_deref(), ctx, flags).await
        }
        CourseCommands::Create(fields) => {
            let mut draft = CourseDraft::default();
            apply_fields(&mut draft, fields)?;
            let client = ctx.admin_client()?;
            editor::save::<Course>(&client, None, &draft, flags).await
        }
        CourseCommands::Update { id, fields } => {
            let client = ctx.admin_client()?;
            let course = editor::find::<Course>(&client, *id).await?;
            let mut draft = CourseDraft::from(&course);
            apply_fields(&mut draft, fields)?;
            editor::save::<Course>(&client, Some(*id), &draft, flags).await
        }
        CourseCommands::Delete { id } => editor::delete::<Course>(*id, ctx, flags).await,
    }
}

fn apply_fields(draft: &mut CourseDraft, fields: &CourseFields) -> anyhow::Result<()> {
    set(&mut draft.title, fields.title.as_ref());
    set(&mut draft.description, fields.description.as_ref());
    set(&mut draft.detailed_description, fields.detailed_description.as_ref());
    set(&mut draft.level, fields.level.as_ref());
    set(&mut draft.students, fields.students.as_ref());
    set(&mut draft.duration, fields.duration.as_ref());
    set(&mut draft.price, fields.price.as_ref());
    set(&mut draft.original_price, fields.original_price.as_ref());
    set(&mut draft.discount, fields.discount.as_ref());
    set(&mut draft.category, fields.category.as_ref());
    set(&mut draft.instructor, fields.instructor.as_ref());
    set(&mut draft.course_fees, fields.course_fees.as_ref());
    set(&mut draft.course_code, fields.course_code.as_ref());
    set(&mut draft.total_amount, fields.total_amount.as_ref());
    if let Some(rating) = fields.rating {
        draft.rating = rating;
    }

    let edits = &fields.features;
    edit_list(
        &mut draft.features,
        &edits.add,
        &edits.remove,
        edits.replace_from.as_deref(),
    )?;
    apply_image(&mut draft.image, &mut draft.image_url, &fields.image);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::cli::subcommands::course::{ImageArgs, ListEdit};

    fn stored_course() -> Course {
        serde_json::from_value(json!({
            "id": 3, "title": "Python", "slug": "python", "level": "Beginner",
            "price": "15000", "features": ["Live classes", "Certificate"],
            "image_url": "python.png", "rating": 4.8
        }))
        .unwrap()
    }

    #[test]
    fn update_keeps_unspecified_fields() {
        let mut draft = CourseDraft::from(&stored_course());
        let fields = CourseFields {
            price: Some("18000".into()),
            ..CourseFields::default()
        };
        apply_fields(&mut draft, &fields).unwrap();
        assert_eq!(draft.title, "Python");
        assert_eq!(draft.price, "18000");
        assert_eq!(draft.level, "Beginner");
        assert_eq!(draft.image_url, "python.png");
        assert!(draft.image.is_none());
        assert!((draft.rating - 4.8).abs() < f64::EPSILON);
    }

    #[test]
    fn feature_edits_apply_in_order() {
        let mut draft = CourseDraft::from(&stored_course());
        let fields = CourseFields {
            features: ListEdit {
                add: vec!["Placement support".into()],
                remove: vec![2],
                replace_from: None,
            },
            ..CourseFields::default()
        };
        apply_fields(&mut draft, &fields).unwrap();
        assert_eq!(draft.features, vec!["Live classes", "Placement support"]);
    }

    #[test]
    fn new_image_goes_into_the_payload() {
        let mut draft = CourseDraft::default();
        let fields = CourseFields {
            title: Some("Tally Prime".into()),
            image: ImageArgs {
                image: Some("/tmp/tally.png".into()),
                image_url: None,
            },
            ..CourseFields::default()
        };
        apply_fields(&mut draft, &fields).unwrap();
        let payload = draft.to_payload().unwrap();
        assert!(payload.has_file("image"));
        assert_eq!(payload.field("title"), Some("Tally Prime"));
        assert_eq!(payload.field("level"), Some("Beginner"));
    }
}
