use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::course::ImageArgs;

/// Project management commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects, optionally searching title and category.
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a project.
    Create(ProjectFields),
    /// Update a project; unspecified fields keep their current values.
    Update {
        id: i64,
        #[command(flatten)]
        fields: ProjectFields,
    },
    /// Delete a project.
    Delete { id: i64 },
}

#[derive(Clone, Debug, Default, Args)]
pub struct ProjectFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub detailed_description: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub duration: Option<String>,
    /// individual or team
    #[arg(long)]
    pub project_type: Option<String>,
    #[arg(long)]
    pub difficulty_level: Option<String>,
    #[arg(long)]
    pub project_code: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub original_price: Option<String>,
    #[arg(long)]
    pub course_fees: Option<String>,
    #[arg(long)]
    pub total_amount: Option<String>,
    #[arg(long)]
    pub discount: Option<String>,
    #[arg(long)]
    pub level: Option<String>,
    #[arg(long)]
    pub rating: Option<String>,
    #[arg(long)]
    pub students_count: Option<String>,
    #[arg(long = "technology")]
    pub add_technologies: Vec<String>,
    #[arg(long = "remove-technology")]
    pub remove_technologies: Vec<usize>,
    #[arg(long = "technologies-file")]
    pub technologies_file: Option<PathBuf>,
    #[arg(long = "prerequisite")]
    pub add_prerequisites: Vec<String>,
    #[arg(long = "remove-prerequisite")]
    pub remove_prerequisites: Vec<usize>,
    #[arg(long = "prerequisites-file")]
    pub prerequisites_file: Option<PathBuf>,
    #[arg(long = "outcome")]
    pub add_outcomes: Vec<String>,
    #[arg(long = "remove-outcome")]
    pub remove_outcomes: Vec<usize>,
    #[arg(long = "outcomes-file")]
    pub outcomes_file: Option<PathBuf>,
    #[command(flatten)]
    pub image: ImageArgs,
}
