//! Editable copies of catalog records for the admin create/update modals.
//!
//! A draft starts from defaults (create) or from an existing record (update),
//! and renders to the multipart body the admin endpoints accept: list fields
//! as JSON strings, a new `image` file part when one was chosen, otherwise the
//! existing `image_url` passed through.

use std::path::PathBuf;

use crate::entities::{Course, Internship, Project};
use crate::enums::InternshipType;
use crate::errors::CoreError;
use crate::form::MultipartPayload;

fn require_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        Err(CoreError::validation("Title is required"))
    } else {
        Ok(())
    }
}

fn attach_image(payload: &mut MultipartPayload, image: Option<&PathBuf>, image_url: &str) {
    match image {
        Some(path) => {
            payload.file("image", path);
        }
        None if !image_url.trim().is_empty() => {
            payload.text("image_url", image_url);
        }
        None => {}
    }
}

fn owned(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Course
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub level: String,
    pub rating: f64,
    pub students: String,
    pub duration: String,
    pub price: String,
    pub original_price: String,
    pub discount: String,
    pub image_url: String,
    pub category: String,
    pub instructor: String,
    pub course_fees: String,
    pub course_code: String,
    pub total_amount: String,
    pub features: Vec<String>,
    /// New image to upload, replacing `image_url`.
    pub image: Option<PathBuf>,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            detailed_description: String::new(),
            level: "Beginner".to_string(),
            rating: 4.5,
            students: "0".to_string(),
            duration: String::new(),
            price: String::new(),
            original_price: String::new(),
            discount: String::new(),
            image_url: String::new(),
            category: String::new(),
            instructor: String::new(),
            course_fees: String::new(),
            course_code: String::new(),
            total_amount: String::new(),
            features: Vec::new(),
            image: None,
        }
    }
}

impl From<&Course> for CourseDraft {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: owned(course.description.as_ref()),
            detailed_description: owned(course.detailed_description.as_ref()),
            level: owned(course.level.as_ref()),
            rating: course.rating.unwrap_or(4.5),
            students: owned(course.students.as_ref()),
            duration: owned(course.duration.as_ref()),
            price: owned(course.price.as_ref()),
            original_price: owned(course.original_price.as_ref()),
            discount: owned(course.discount.as_ref()),
            image_url: owned(course.image_url.as_ref()),
            category: owned(course.category.as_ref()),
            instructor: owned(course.instructor.as_ref()),
            course_fees: owned(course.course_fees.as_ref()),
            course_code: owned(course.course_code.as_ref()),
            total_amount: owned(course.total_amount.as_ref()),
            features: course.features.clone(),
            image: None,
        }
    }
}

impl CourseDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the title is blank.
    pub fn to_payload(&self) -> Result<MultipartPayload, CoreError> {
        require_title(&self.title)?;
        let mut payload = MultipartPayload::new();
        payload
            .text("title", &self.title)
            .text("description", &self.description)
            .text("detailed_description", &self.detailed_description)
            .text("level", &self.level)
            .text("rating", self.rating.to_string())
            .text("students", &self.students)
            .text("duration", &self.duration)
            .text("price", &self.price)
            .text("original_price", &self.original_price)
            .text("discount", &self.discount)
            .text("category", &self.category)
            .text("instructor", &self.instructor)
            .text("course_fees", &self.course_fees)
            .text("course_code", &self.course_code)
            .text("total_amount", &self.total_amount)
            .json_list("features", &self.features);
        attach_image(&mut payload, self.image.as_ref(), &self.image_url);
        Ok(payload)
    }
}

// ---------------------------------------------------------------------------
// Internship
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternshipDraft {
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub category: String,
    pub duration: String,
    pub internship_type: InternshipType,
    pub location: String,
    pub skills: Vec<String>,
    pub eligibility: String,
    pub perks: Vec<String>,
    pub image_url: String,
    pub is_active: bool,
    pub image: Option<PathBuf>,
}

impl Default for InternshipDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            detailed_description: String::new(),
            category: String::new(),
            duration: "3 Months".to_string(),
            internship_type: InternshipType::Remote,
            location: String::new(),
            skills: Vec::new(),
            eligibility: String::new(),
            perks: Vec::new(),
            image_url: String::new(),
            is_active: true,
            image: None,
        }
    }
}

impl From<&Internship> for InternshipDraft {
    fn from(internship: &Internship) -> Self {
        Self {
            title: internship.title.clone(),
            description: owned(internship.description.as_ref()),
            detailed_description: owned(internship.detailed_description.as_ref()),
            category: owned(internship.category.as_ref()),
            duration: owned(internship.duration.as_ref()),
            internship_type: internship.internship_type.unwrap_or(InternshipType::Remote),
            location: owned(internship.location.as_ref()),
            skills: internship.skills.clone(),
            eligibility: owned(internship.eligibility.as_ref()),
            perks: internship.perks.clone(),
            image_url: owned(internship.image_url.as_ref()),
            is_active: internship.is_active,
            image: None,
        }
    }
}

impl InternshipDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the title is blank.
    pub fn to_payload(&self) -> Result<MultipartPayload, CoreError> {
        require_title(&self.title)?;
        let mut payload = MultipartPayload::new();
        payload
            .text("title", &self.title)
            .text("description", &self.description)
            .text("detailed_description", &self.detailed_description)
            .text("category", &self.category)
            .text("duration", &self.duration)
            .text("internship_type", self.internship_type.as_str())
            .text("location", &self.location)
            .json_list("skills", &self.skills)
            .text("eligibility", &self.eligibility)
            .json_list("perks", &self.perks)
            .text("is_active", self.is_active.to_string());
        attach_image(&mut payload, self.image.as_ref(), &self.image_url);
        Ok(payload)
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub category: String,
    pub duration: String,
    pub project_type: String,
    pub difficulty_level: String,
    pub image_url: String,
    pub project_code: String,
    pub technologies: Vec<String>,
    pub prerequisites: Vec<String>,
    pub learning_outcomes: Vec<String>,
    pub price: String,
    pub original_price: String,
    pub course_fees: String,
    pub total_amount: String,
    pub discount: String,
    pub level: String,
    pub rating: String,
    pub students_count: String,
    pub image: Option<PathBuf>,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            detailed_description: String::new(),
            category: String::new(),
            duration: "4 Weeks".to_string(),
            project_type: "individual".to_string(),
            difficulty_level: "Intermediate".to_string(),
            image_url: String::new(),
            project_code: String::new(),
            technologies: Vec::new(),
            prerequisites: Vec::new(),
            learning_outcomes: Vec::new(),
            price: String::new(),
            original_price: String::new(),
            course_fees: String::new(),
            total_amount: String::new(),
            discount: String::new(),
            level: String::new(),
            rating: "4.5".to_string(),
            students_count: "0".to_string(),
            image: None,
        }
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: owned(project.description.as_ref()),
            detailed_description: owned(project.detailed_description.as_ref()),
            category: owned(project.category.as_ref()),
            duration: owned(project.duration.as_ref()),
            project_type: owned(project.project_type.as_ref()),
            difficulty_level: owned(project.difficulty_level.as_ref()),
            image_url: owned(project.image_url.as_ref()),
            project_code: owned(project.project_code.as_ref()),
            technologies: project.technologies.clone(),
            prerequisites: project.prerequisites.clone(),
            learning_outcomes: project.learning_outcomes.clone(),
            price: owned(project.price.as_ref()),
            original_price: owned(project.original_price.as_ref()),
            course_fees: owned(project.course_fees.as_ref()),
            total_amount: owned(project.total_amount.as_ref()),
            discount: owned(project.discount.as_ref()),
            level: owned(project.level.as_ref()),
            rating: project.rating.map_or_else(|| "4.5".to_string(), |r| r.to_string()),
            students_count: owned(project.students_count.as_ref()),
            image: None,
        }
    }
}

impl ProjectDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the title is blank.
    pub fn to_payload(&self) -> Result<MultipartPayload, CoreError> {
        require_title(&self.title)?;
        let mut payload = MultipartPayload::new();
        payload
            .text("title", &self.title)
            .text("description", &self.description)
            .text("detailed_description", &self.detailed_description)
            .text("category", &self.category)
            .text("duration", &self.duration)
            .text("project_type", &self.project_type)
            .text("difficulty_level", &self.difficulty_level)
            .text("project_code", &self.project_code)
            .json_list("technologies", &self.technologies)
            .json_list("prerequisites", &self.prerequisites)
            .json_list("learning_outcomes", &self.learning_outcomes)
            .text("price", &self.price)
            .text("original_price", &self.original_price)
            .text("course_fees", &self.course_fees)
            .text("total_amount", &self.total_amount)
            .text("discount", &self.discount)
            .text("level", &self.level)
            .text("rating", &self.rating)
            .text("students_count", &self.students_count);
        attach_image(&mut payload, self.image.as_ref(), &self.image_url);
        Ok(payload)
    }
}
