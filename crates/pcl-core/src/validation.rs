//! Public enrollment forms and their client-side validation.
//!
//! Each form validates in a fixed order and reports only the first failure,
//! as [`CoreError::Validation`] carrying the user-facing message. Payloads
//! are built only from forms that pass validation.

use std::path::{Path, PathBuf};

use crate::enums::PaymentMethod;
use crate::errors::CoreError;
use crate::form::MultipartPayload;

/// Code printed on the enrollment pages that every submission must echo.
pub const VALIDATION_CODE: &str = "m2nz";

/// Upload size limit for images and resumes.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Minimum trimmed length of an internship motivation statement.
pub const MIN_MOTIVATION_CHARS: usize = 50;

/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Exactly ten ASCII digits.
#[must_use]
pub fn is_ten_digit_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.bytes().all(|b| b.is_ascii_digit())
}

/// Case-insensitive and trimmed for every form.
fn code_matches(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case(VALIDATION_CODE)
}

fn ensure(ok: bool, message: &str) -> Result<(), CoreError> {
    if ok {
        Ok(())
    } else {
        Err(CoreError::validation(message))
    }
}

// ---------------------------------------------------------------------------
// Uploads
// ---------------------------------------------------------------------------

/// What an uploaded file is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Catalog images and payment screenshots.
    Image,
    Resume,
}

impl UploadKind {
    #[must_use]
    pub const fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => &["jpg", "jpeg", "png", "gif", "webp"],
            Self::Resume => &["pdf", "doc", "docx"],
        }
    }

    const fn type_message(self) -> &'static str {
        match self {
            Self::Image => "Please upload a valid image file (JPG, PNG, GIF, or WebP)",
            Self::Resume => "Please upload resume in PDF, DOC, or DOCX format",
        }
    }

    const fn size_message(self) -> &'static str {
        match self {
            Self::Image => "File size must be less than 5MB",
            Self::Resume => "Resume file size should not exceed 5MB",
        }
    }
}

/// Check an upload's extension and size before it is attached to a form.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the extension is not allowed for
/// `kind` or `size` exceeds [`MAX_UPLOAD_BYTES`].
pub fn check_upload(kind: UploadKind, path: &Path, size: u64) -> Result<(), CoreError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    ensure(
        kind.allowed_extensions().contains(&extension.as_str()),
        kind.type_message(),
    )?;
    ensure(size <= MAX_UPLOAD_BYTES, kind.size_message())
}

// ---------------------------------------------------------------------------
// Internship application
// ---------------------------------------------------------------------------

/// The internship enrollment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternshipApplicationForm {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub mobile: String,
    pub experience_level: String,
    pub portfolio_url: String,
    pub github_url: String,
    pub motivation: String,
    pub gstin: String,
    pub billing_address: String,
    pub landmark: String,
    pub district: String,
    pub state: String,
    pub preferred_start_date: String,
    pub preferred_time: String,
    pub availability: String,
    pub validation_code: String,
    pub resume: Option<PathBuf>,
}

impl Default for InternshipApplicationForm {
    fn default() -> Self {
        Self {
            fname: String::new(),
            lname: String::new(),
            email: String::new(),
            mobile: String::new(),
            experience_level: "Fresher".to_string(),
            portfolio_url: String::new(),
            github_url: String::new(),
            motivation: String::new(),
            gstin: String::new(),
            billing_address: String::new(),
            landmark: String::new(),
            district: String::new(),
            state: String::new(),
            preferred_start_date: String::new(),
            preferred_time: "Full-Time".to_string(),
            availability: "Immediate".to_string(),
            validation_code: String::new(),
            resume: None,
        }
    }
}

impl InternshipApplicationForm {
    /// # Errors
    ///
    /// Returns the first failing rule as [`CoreError::Validation`].
    pub fn validate(&self) -> Result<(), CoreError> {
        ensure(!self.fname.trim().is_empty(), "First name is required")?;
        ensure(!self.lname.trim().is_empty(), "Last name is required")?;
        ensure(is_valid_email(&self.email), "Please enter a valid email address")?;
        ensure(
            is_ten_digit_mobile(&self.mobile),
            "Please enter a valid 10-digit mobile number",
        )?;
        ensure(self.resume.is_some(), "Please upload your resume")?;
        let motivation = self.motivation.trim();
        ensure(!motivation.is_empty(), "Please provide your motivation")?;
        ensure(
            motivation.chars().count() >= MIN_MOTIVATION_CHARS,
            "Please provide a detailed motivation (minimum 50 characters)",
        )?;
        ensure(
            code_matches(&self.validation_code),
            "Invalid validation code. Please enter: m2nz",
        )
    }

    /// Validate, then build the multipart body. Blank text fields are
    /// omitted; `internship_slug` and the resume are always attached.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the form does not validate.
    pub fn to_payload(&self, internship_slug: &str) -> Result<MultipartPayload, CoreError> {
        self.validate()?;
        let mut payload = MultipartPayload::new();
        for (name, value) in [
            ("fname", &self.fname),
            ("lname", &self.lname),
            ("email", &self.email),
            ("mobile", &self.mobile),
            ("experience_level", &self.experience_level),
            ("portfolio_url", &self.portfolio_url),
            ("github_url", &self.github_url),
            ("motivation", &self.motivation),
            ("gstin", &self.gstin),
            ("billing_address", &self.billing_address),
            ("landmark", &self.landmark),
            ("district", &self.district),
            ("state", &self.state),
            ("preferred_start_date", &self.preferred_start_date),
            ("preferred_time", &self.preferred_time),
            ("availability", &self.availability),
            ("validation_code", &self.validation_code),
        ] {
            payload.text_if_present(name, Some(value.as_str()));
        }
        payload.text("internship_slug", internship_slug);
        if let Some(resume) = &self.resume {
            payload.file("resume", resume);
        }
        Ok(payload)
    }
}

// ---------------------------------------------------------------------------
// Course payment and project enrollment
// ---------------------------------------------------------------------------

/// Name/email/mobile checks shared by the payment forms.
fn validate_contact(
    name: &str,
    email: &str,
    mobile: &str,
    keep_digit: fn(char) -> bool,
) -> Result<(), CoreError> {
    for (label, value) in [("Name", name), ("Email", email), ("Mobile", mobile)] {
        ensure(!value.trim().is_empty(), &format!("{label} is required"))?;
    }
    ensure(is_valid_email(email), "Please enter a valid email address")?;
    let digits: String = mobile.chars().filter(|c| keep_digit(*c)).collect();
    ensure(
        is_ten_digit_mobile(&digits),
        "Please enter a valid 10-digit mobile number",
    )
}

/// The course payment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursePaymentForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub gstin: String,
    pub billing_address: String,
    pub landmark: String,
    pub district: String,
    pub state: String,
    pub start_date: String,
    pub training_mode: String,
    pub batch_preference: String,
    pub validation_code: String,
    pub payment_method: PaymentMethod,
    pub payment_screenshot: Option<PathBuf>,
}

impl Default for CoursePaymentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            mobile: String::new(),
            gstin: String::new(),
            billing_address: String::new(),
            landmark: String::new(),
            district: "Same".to_string(),
            state: "Same".to_string(),
            start_date: String::new(),
            training_mode: "Online Training".to_string(),
            batch_preference: "weekdays".to_string(),
            validation_code: String::new(),
            payment_method: PaymentMethod::Neft,
            payment_screenshot: None,
        }
    }
}

impl CoursePaymentForm {
    /// # Errors
    ///
    /// Returns the first failing rule as [`CoreError::Validation`].
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_contact(&self.name, &self.email, &self.mobile, |c| c.is_ascii_digit())?;
        ensure(
            code_matches(&self.validation_code),
            "Please enter the correct validation code",
        )?;
        ensure(
            !self.payment_method.requires_screenshot() || self.payment_screenshot.is_some(),
            "Please upload payment screenshot for NEFT/GPay payments",
        )
    }

    /// Validate, then build the body: every field as entered plus
    /// `course_slug` and the optional screenshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the form does not validate.
    pub fn to_payload(&self, course_slug: &str) -> Result<MultipartPayload, CoreError> {
        self.validate()?;
        let mut payload = MultipartPayload::new();
        payload
            .text("name", &self.name)
            .text("email", &self.email)
            .text("mobile", &self.mobile)
            .text("gstin", &self.gstin)
            .text("billing_address", &self.billing_address)
            .text("landmark", &self.landmark)
            .text("district", &self.district)
            .text("state", &self.state)
            .text("start_date", &self.start_date)
            .text("training_mode", &self.training_mode)
            .text("batch_preference", &self.batch_preference)
            .text("validation_code", &self.validation_code)
            .text("payment_method", self.payment_method.as_str())
            .text("course_slug", course_slug);
        if let Some(screenshot) = &self.payment_screenshot {
            payload.file("payment_screenshot", screenshot);
        }
        Ok(payload)
    }
}

/// The project enrollment (project payment) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEnrollmentForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub gstin: String,
    pub billing_address: String,
    pub landmark: String,
    pub district: String,
    pub state: String,
    pub preferred_start_date: String,
    pub preferred_time: String,
    pub team_size: String,
    pub validation_code: String,
    pub payment_method: PaymentMethod,
    pub payment_screenshot: Option<PathBuf>,
}

impl Default for ProjectEnrollmentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            mobile: String::new(),
            gstin: String::new(),
            billing_address: String::new(),
            landmark: String::new(),
            district: String::new(),
            state: String::new(),
            preferred_start_date: String::new(),
            preferred_time: "Morning".to_string(),
            team_size: "1".to_string(),
            validation_code: String::new(),
            payment_method: PaymentMethod::Neft,
            payment_screenshot: None,
        }
    }
}

impl ProjectEnrollmentForm {
    /// # Errors
    ///
    /// Returns the first failing rule as [`CoreError::Validation`].
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_contact(&self.name, &self.email, &self.mobile, |c| !c.is_whitespace())?;
        ensure(
            code_matches(&self.validation_code),
            "Please enter the correct validation code: m2NZ",
        )?;
        ensure(
            !self.payment_method.requires_screenshot() || self.payment_screenshot.is_some(),
            "Please upload payment screenshot for NEFT/GPay payment",
        )
    }

    /// Validate, then build the body. Text is trimmed, blank district/state
    /// become `Not specified`, and the code is sent lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the form does not validate.
    pub fn to_payload(&self, project_slug: &str) -> Result<MultipartPayload, CoreError> {
        fn or_unspecified(value: &str) -> &str {
            let value = value.trim();
            if value.is_empty() { "Not specified" } else { value }
        }

        self.validate()?;
        let mut payload = MultipartPayload::new();
        payload
            .text("project_slug", project_slug)
            .text("name", self.name.trim())
            .text("email", self.email.trim())
            .text("mobile", self.mobile.trim())
            .text("gstin", self.gstin.trim())
            .text("billing_address", self.billing_address.trim())
            .text("landmark", self.landmark.trim())
            .text("district", or_unspecified(&self.district))
            .text("state", or_unspecified(&self.state))
            .text("preferred_start_date", &self.preferred_start_date)
            .text("preferred_time", &self.preferred_time)
            .text("team_size", &self.team_size)
            .text("payment_method", self.payment_method.as_str())
            .text("validation_code", self.validation_code.trim().to_lowercase());
        if let Some(screenshot) = &self.payment_screenshot {
            payload.file("payment_screenshot", screenshot);
        }
        Ok(payload)
    }
}

// ---------------------------------------------------------------------------
// Enquiries
// ---------------------------------------------------------------------------

/// Roles offered by the quick internship enquiry. Any other non-blank role
/// is sent as typed.
pub const ENQUIRY_ROLES: &[&str] = &[
    "FULL STACK DEVELOPER",
    "UI UX DESIGNER",
    "DATA ANALYST",
    "DIGITAL MARKETING",
    "CYBER SECURITY",
    "DATA SCIENCE",
    "DEVOPS",
    "ROBOTICS AUTOMATION",
];

/// The listed spelling of `role` when it names one of [`ENQUIRY_ROLES`],
/// otherwise the trimmed input.
#[must_use]
pub fn enquiry_role(role: &str) -> String {
    let role = role.trim();
    ENQUIRY_ROLES
        .iter()
        .find(|known| known.eq_ignore_ascii_case(role))
        .map_or_else(|| role.to_string(), |known| (*known).to_string())
}

fn validate_names_and_email(fname: &str, lname: &str, email: &str) -> Result<(), CoreError> {
    ensure(!fname.trim().is_empty(), "First name is required")?;
    ensure(!lname.trim().is_empty(), "Last name is required")?;
    ensure(is_valid_email(email.trim()), "Please enter a valid email address")
}

/// The general contact form, sent as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactEnquiryForm {
    pub fname: String,
    pub lname: String,
    pub email: String,
    /// Free-form; international numbers are accepted.
    pub mobile: String,
    pub message: String,
}

impl ContactEnquiryForm {
    /// # Errors
    ///
    /// Returns the first failing rule as [`CoreError::Validation`].
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_names_and_email(&self.fname, &self.lname, &self.email)?;
        ensure(!self.message.trim().is_empty(), "Please enter your message")
    }

    /// Validate, then build the JSON body with every field trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the form does not validate.
    pub fn to_body(&self) -> Result<serde_json::Value, CoreError> {
        self.validate()?;
        Ok(serde_json::json!({
            "fname": self.fname.trim(),
            "lname": self.lname.trim(),
            "email": self.email.trim(),
            "mobile": self.mobile.trim(),
            "message": self.message.trim(),
        }))
    }
}

/// The quick internship enquiry: a role of interest plus an optional CV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternshipEnquiryForm {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub mobile: String,
    pub internship: String,
    pub message: String,
    pub cv: Option<PathBuf>,
}

impl InternshipEnquiryForm {
    /// # Errors
    ///
    /// Returns the first failing rule as [`CoreError::Validation`].
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_names_and_email(&self.fname, &self.lname, &self.email)?;
        ensure(!self.mobile.trim().is_empty(), "Mobile number is required")?;
        ensure(
            !self.internship.trim().is_empty(),
            "Please select or enter an internship role.",
        )?;
        ensure(!self.message.trim().is_empty(), "Please enter your message")
    }

    /// Validate, then build the multipart body. All six text fields are
    /// always sent; `cv` is attached only when present.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the form does not validate.
    pub fn to_payload(&self) -> Result<MultipartPayload, CoreError> {
        self.validate()?;
        let mut payload = MultipartPayload::new();
        payload
            .text("fname", self.fname.trim())
            .text("lname", self.lname.trim())
            .text("email", self.email.trim())
            .text("mobile", self.mobile.trim())
            .text("internship", enquiry_role(&self.internship))
            .text("message", self.message.trim());
        if let Some(cv) = &self.cv {
            payload.file("cv", cv);
        }
        Ok(payload)
    }
}
