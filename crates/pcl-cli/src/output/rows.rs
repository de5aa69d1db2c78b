//! Curated table columns per entity. JSON output always carries every field.

use pcl_core::entities::{
    Course, Internship, InternshipApplication, Payment, Project, ProjectEnrollment,
};
use pcl_core::text::team_size_label;

/// A record that can be shown as one table row.
pub trait TableRow {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

fn opt(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}

fn money(amount: Option<f64>) -> String {
    amount.map_or_else(|| "-".to_string(), |a| format!("{a:.2}"))
}

fn active(is_active: bool) -> String {
    if is_active { "active" } else { "inactive" }.to_string()
}

impl TableRow for Course {
    const HEADERS: &'static [&'static str] =
        &["id", "title", "category", "level", "price", "total", "status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            opt(self.category.as_deref()),
            opt(self.level.as_deref()),
            opt(self.price.as_deref()),
            opt(self.total_amount.as_deref()),
            active(self.is_active),
        ]
    }
}

impl TableRow for Internship {
    const HEADERS: &'static [&'static str] =
        &["id", "title", "category", "type", "duration", "applications", "status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            opt(self.category.as_deref()),
            self.internship_type.map_or_else(|| "-".to_string(), |t| t.to_string()),
            opt(self.duration.as_deref()),
            self.total_applications.to_string(),
            active(self.is_active),
        ]
    }
}

impl TableRow for Project {
    const HEADERS: &'static [&'static str] =
        &["id", "title", "category", "difficulty", "technologies", "price", "status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            opt(self.category.as_deref()),
            opt(self.difficulty_level.as_deref()),
            self.technologies.join(", "),
            opt(self.price.as_deref()),
            active(self.is_active),
        ]
    }
}

impl TableRow for Payment {
    const HEADERS: &'static [&'static str] = &[
        "id", "payment_id", "student", "email", "course", "method", "amount", "status", "created",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.payment_id.clone(),
            opt(self.student_name.as_deref()),
            opt(self.email.as_deref()),
            opt(self.course_title.as_deref()),
            opt(self.payment_method.as_deref()),
            money(self.amount),
            self.payment_status.to_string(),
            self.created_at
                .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string()),
        ]
    }
}

impl TableRow for ProjectEnrollment {
    const HEADERS: &'static [&'static str] = &[
        "id", "enrollment_id", "student", "project", "team", "method", "amount", "status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.enrollment_id.clone(),
            opt(self.student_name.as_deref()),
            opt(self.project_title.as_deref()),
            team_size_label(self.team_size.as_deref()),
            opt(self.payment_method.as_deref()),
            money(self.amount),
            self.payment_status.to_string(),
        ]
    }
}

impl TableRow for InternshipApplication {
    const HEADERS: &'static [&'static str] = &[
        "id", "enrollment_id", "name", "email", "internship", "experience", "status", "applied",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.enrollment_id.clone(),
            opt(self.full_name().as_deref()),
            opt(self.email.as_deref()),
            opt(self.internship_title.as_deref()),
            opt(self.experience_level.as_deref()),
            self.payment_status.to_string(),
            self.date
                .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string()),
        ]
    }
}
