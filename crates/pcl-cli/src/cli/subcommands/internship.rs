use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::course::ImageArgs;

/// Internship management commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InternshipCommands {
    /// List internships, optionally searching title and category.
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Create an internship.
    Create(InternshipFields),
    /// Update an internship; unspecified fields keep their current values.
    Update {
        id: i64,
        #[command(flatten)]
        fields: InternshipFields,
    },
    /// Delete an internship.
    Delete { id: i64 },
}

#[derive(Clone, Debug, Default, Args)]
pub struct InternshipFields {
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
    /// remote, onsite, or hybrid
    #[arg(long = "type")]
    pub internship_type: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub eligibility: Option<String>,
    /// Whether the internship is listed publicly.
    #[arg(long)]
    pub active: Option<bool>,
    #[arg(long = "skill")]
    pub add_skills: Vec<String>,
    #[arg(long = "remove-skill")]
    pub remove_skills: Vec<usize>,
    #[arg(long = "skills-file")]
    pub skills_file: Option<PathBuf>,
    #[arg(long = "perk")]
    pub add_perks: Vec<String>,
    #[arg(long = "remove-perk")]
    pub remove_perks: Vec<usize>,
    #[arg(long = "perks-file")]
    pub perks_file: Option<PathBuf>,
    #[command(flatten)]
    pub image: ImageArgs,
}
