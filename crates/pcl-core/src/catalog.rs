//! Filters for the public catalog pages.

use crate::entities::{Course, Internship, Project};
use crate::enums::{InternshipType, StatusFilter};
use crate::text::any_contains_ci;

/// Filters applied to the public course list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    pub search: String,
    /// Exact category, case-insensitive. `None` means all.
    pub category: Option<String>,
    /// Substring of the level, case-insensitive. `None` means all.
    pub level: Option<String>,
}

impl CourseQuery {
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let search = self.search.trim();
        any_contains_ci(
            &[
                Some(course.title.as_str()),
                course.description.as_deref(),
                course.category.as_deref(),
                course.instructor.as_deref(),
            ],
            search,
        ) && exact_ci(course.category.as_deref(), self.category.as_deref())
            && any_contains_ci(&[course.level.as_deref()], self.level.as_deref().unwrap_or(""))
    }

    #[must_use]
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Filters applied to the public internship list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternshipQuery {
    pub search: String,
    pub internship_type: StatusFilter<InternshipType>,
}

impl InternshipQuery {
    #[must_use]
    pub fn matches(&self, internship: &Internship) -> bool {
        let type_ok = match self.internship_type {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => internship.internship_type == Some(wanted),
        };
        type_ok
            && any_contains_ci(
                &[
                    Some(internship.title.as_str()),
                    internship.category.as_deref(),
                    internship.description.as_deref(),
                ],
                self.search.trim(),
            )
    }

    #[must_use]
    pub fn apply<'a>(&self, internships: &'a [Internship]) -> Vec<&'a Internship> {
        internships.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Filters applied to the public project list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub search: String,
    pub category: Option<String>,
    /// Exact difficulty level, case-insensitive.
    pub difficulty: Option<String>,
}

impl ProjectQuery {
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        let search = self.search.trim();
        let search_ok = any_contains_ci(
            &[
                Some(project.title.as_str()),
                project.description.as_deref(),
                project.category.as_deref(),
            ],
            search,
        ) || project
            .technologies
            .iter()
            .any(|t| any_contains_ci(&[Some(t.as_str())], search));
        search_ok
            && exact_ci(project.category.as_deref(), self.category.as_deref())
            && exact_ci(project.difficulty_level.as_deref(), self.difficulty.as_deref())
    }

    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// `wanted == None` (or `all`) matches everything; otherwise equality
/// ignoring case. A missing field never matches a concrete value.
fn exact_ci(field: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted.map(str::trim) {
        None | Some("") => true,
        Some(w) if w.eq_ignore_ascii_case("all") => true,
        Some(w) => field.is_some_and(|f| f.trim().to_lowercase() == w.to_lowercase()),
    }
}

/// Distinct categories in first-seen order, for building filter choices.
#[must_use]
pub fn categories<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.into_iter().flatten() {
        let value = value.trim();
        if !value.is_empty() && !seen.iter().any(|s| s.eq_ignore_ascii_case(value)) {
            seen.push(value.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn courses() -> Vec<Course> {
        serde_json::from_value(json!([
            {"id": 1, "title": "Python Programming", "description": "Learn Python",
             "category": "Programming", "instructor": "Anil", "level": "Beginner", "slug": "python"},
            {"id": 2, "title": "Power BI", "description": null, "category": "Data Analytics",
             "instructor": "Meera", "level": "Beginner to Advanced", "slug": "power-bi"},
            {"id": 3, "title": "Tally Prime", "category": null, "level": null, "slug": "tally"},
        ]))
        .unwrap()
    }

    fn ids<T>(items: &[&T], id: impl Fn(&T) -> i64) -> Vec<i64> {
        items.iter().map(|i| id(i)).collect()
    }

    #[test]
    fn course_search_covers_instructor() {
        let all = courses();
        let query = CourseQuery { search: "meera".into(), ..CourseQuery::default() };
        assert_eq!(ids(&query.apply(&all), |c| c.id), vec![2]);
    }

    #[test]
    fn course_category_is_exact_and_level_is_substring() {
        let all = courses();
        let query = CourseQuery {
            category: Some("programming".into()),
            ..CourseQuery::default()
        };
        assert_eq!(ids(&query.apply(&all), |c| c.id), vec![1]);

        let query = CourseQuery { level: Some("advanced".into()), ..CourseQuery::default() };
        assert_eq!(ids(&query.apply(&all), |c| c.id), vec![2]);

        let query = CourseQuery { category: Some("all".into()), ..CourseQuery::default() };
        assert_eq!(query.apply(&all).len(), 3);
    }

    #[test]
    fn internship_type_filter() {
        let internships: Vec<Internship> = serde_json::from_value(json!([
            {"id": 1, "title": "Web Intern", "internship_type": "remote", "slug": "web"},
            {"id": 2, "title": "Lab Intern", "internship_type": "onsite", "slug": "lab"},
            {"id": 3, "title": "Unknown Intern", "slug": "unknown"},
        ]))
        .unwrap();
        let query = InternshipQuery {
            internship_type: StatusFilter::Only(InternshipType::Onsite),
            ..InternshipQuery::default()
        };
        assert_eq!(ids(&query.apply(&internships), |i| i.id), vec![2]);
        assert_eq!(InternshipQuery::default().apply(&internships).len(), 3);
    }

    #[test]
    fn project_search_includes_technologies() {
        let projects: Vec<Project> = serde_json::from_value(json!([
            {"id": 1, "title": "Weather Station", "technologies": ["Arduino", "MQTT"],
             "difficulty_level": "Intermediate", "slug": "weather"},
            {"id": 2, "title": "Chat App", "technologies": ["React"], "slug": "chat"},
        ]))
        .unwrap();
        let query = ProjectQuery { search: "mqtt".into(), ..ProjectQuery::default() };
        assert_eq!(ids(&query.apply(&projects), |p| p.id), vec![1]);

        let query = ProjectQuery { difficulty: Some("intermediate".into()), ..ProjectQuery::default() };
        assert_eq!(ids(&query.apply(&projects), |p| p.id), vec![1]);
    }

    #[test]
    fn categories_are_distinct_in_order() {
        let all = courses();
        assert_eq!(
            categories(all.iter().map(|c| c.category.as_deref())),
            vec!["Programming".to_string(), "Data Analytics".to_string()]
        );
    }
}
