use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Course management commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// List courses, optionally searching title and category.
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a course.
    Create(CourseFields),
    /// Update a course; unspecified fields keep their current values.
    Update {
        id: i64,
        #[command(flatten)]
        fields: CourseFields,
    },
    /// Delete a course.
    Delete { id: i64 },
}

#[derive(Clone, Debug, Default, Args)]
pub struct CourseFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub detailed_description: Option<String>,
    #[arg(long)]
    pub level: Option<String>,
    #[arg(long)]
    pub rating: Option<f64>,
    #[arg(long)]
    pub students: Option<String>,
    #[arg(long)]
    pub duration: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub original_price: Option<String>,
    #[arg(long)]
    pub discount: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub instructor: Option<String>,
    #[arg(long)]
    pub course_fees: Option<String>,
    #[arg(long)]
    pub course_code: Option<String>,
    #[arg(long)]
    pub total_amount: Option<String>,
    #[command(flatten)]
    pub features: ListEdit,
    #[command(flatten)]
    pub image: ImageArgs,
}

/// Edits to the course feature list.
#[derive(Clone, Debug, Default, Args)]
pub struct ListEdit {
    /// Append a feature (repeatable).
    #[arg(long = "feature")]
    pub add: Vec<String>,
    /// Remove the feature at this 1-based position (repeatable).
    #[arg(long = "remove-feature")]
    pub remove: Vec<usize>,
    /// Replace the list with the non-blank lines of a file.
    #[arg(long = "features-file")]
    pub replace_from: Option<PathBuf>,
}

/// Image upload or URL, shared by the catalog editors.
#[derive(Clone, Debug, Default, Args)]
pub struct ImageArgs {
    /// New image to upload (JPG, PNG, GIF, WebP; max 5MB).
    #[arg(long)]
    pub image: Option<PathBuf>,
    /// Existing image URL to keep when no file is uploaded.
    #[arg(long)]
    pub image_url: Option<String>,
}
