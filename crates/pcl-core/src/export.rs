//! CSV export of internship applications.

use chrono::NaiveDate;

use crate::entities::InternshipApplication;

pub const APPLICATION_CSV_HEADERS: [&str; 10] = [
    "Enrollment ID",
    "Name",
    "Email",
    "Mobile",
    "Internship",
    "Experience Level",
    "Preferred Start Date",
    "Availability",
    "Status",
    "Applied Date",
];

/// `internship-applications-YYYY-MM-DD.csv`
#[must_use]
pub fn applications_csv_filename(date: NaiveDate) -> String {
    format!("internship-applications-{}.csv", date.format("%Y-%m-%d"))
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Render applications as CSV. The header row is bare; every data cell is
/// double-quoted. Rows are joined with `\n` and there is no trailing newline.
#[must_use]
pub fn applications_to_csv<'a>(
    applications: impl IntoIterator<Item = &'a InternshipApplication>,
) -> String {
    let mut lines = vec![APPLICATION_CSV_HEADERS.join(",")];
    for app in applications {
        let start_date = app
            .preferred_start_date
            .map_or_else(|| "N/A".to_string(), |d| d.format("%Y-%m-%d").to_string());
        let applied = app
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let cells = [
            app.enrollment_id.clone(),
            app.full_name().unwrap_or_default(),
            app.email.clone().unwrap_or_default(),
            app.mobile.clone().unwrap_or_default(),
            app.internship_title.clone().unwrap_or_default(),
            app.experience_level.clone().unwrap_or_default(),
            start_date,
            app.availability.clone().unwrap_or_default(),
            app.payment_status.as_str().to_string(),
            applied,
        ];
        lines.push(cells.iter().map(|c| quote(c)).collect::<Vec<_>>().join(","));
    }
    lines.join("\n")
}
