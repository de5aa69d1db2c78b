use clap::{Args, Subcommand, ValueEnum};

/// Public catalog browsing.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// Active courses.
    Courses(CourseQueryArgs),
    /// Active internships.
    Internships(InternshipQueryArgs),
    /// Active projects.
    Projects(ProjectQueryArgs),
    /// Distinct categories of a catalog.
    Categories { kind: CatalogKind },
    /// One entry by slug.
    Show { kind: CatalogKind, slug: String },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CatalogKind {
    Course,
    Internship,
    Project,
}

#[derive(Clone, Debug, Args)]
pub struct CourseQueryArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub level: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct InternshipQueryArgs {
    #[arg(long)]
    pub search: Option<String>,
    /// `all`, `remote`, `onsite`, or `hybrid`.
    #[arg(long = "type", default_value = "all")]
    pub internship_type: String,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectQueryArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub difficulty: Option<String>,
}
