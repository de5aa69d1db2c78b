//! Public forms: internship applications, course payments, project
//! enrollments, and the two enquiry forms.

use anyhow::Context;
use pcl_client::Receipt;
use pcl_core::enums::PaymentMethod;
use pcl_core::validation::{
    ContactEnquiryForm, CoursePaymentForm, InternshipApplicationForm, InternshipEnquiryForm,
    ProjectEnrollmentForm,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::submit::{
    BillingArgs, ContactArgs, CoursePayArgs, EnquirerArgs, EnquiryArgs, InternshipApplyArgs,
    ProjectEnrollArgs,
};
use crate::cli::subcommands::{ApplyCommands, EnrollCommands, PayCommands};
use crate::commands::shared::editor::set;
use crate::commands::shared::parse::parse_value;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
struct SubmitResponse {
    submitted: &'static str,
    slug: String,
    reference: Option<String>,
    message: Option<String>,
}

#[derive(Serialize)]
struct EnquiryResponse {
    submitted: &'static str,
    id: Option<i64>,
    message: String,
}

pub async fn apply(action: &ApplyCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let args = match action {
        ApplyCommands::Internship(args) => args,
        ApplyCommands::Enquiry(args) => return enquire(args, ctx, flags).await,
    };
    let form = application_form(args)?;
    let receipt = with_spinner(
        "Submitting application...",
        "submission failed",
        ctx.client.submit_internship_application(&args.slug, &form),
    )
    .await?;
    finish(&receipt, "application", &args.slug, "enrollment_id", flags)
}

pub async fn pay(action: &PayCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let PayCommands::Course(args) = action;
    let form = course_payment_form(args)?;
    let receipt = with_spinner(
        "Submitting payment...",
        "submission failed",
        ctx.client.submit_course_payment(&args.slug, &form),
    )
    .await?;
    finish(&receipt, "course payment", &args.slug, "payment_id", flags)
}

pub async fn enroll(action: &EnrollCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let EnrollCommands::Project(args) = action;
    let form = project_enrollment_form(args)?;
    let receipt = with_spinner(
        "Submitting enrollment...",
        "submission failed",
        ctx.client.submit_project_enrollment(&args.slug, &form),
    )
    .await?;
    finish(&receipt, "project enrollment", &args.slug, "enrollment_id", flags)
}

pub async fn contact(args: &ContactArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = contact_form(args);
    let receipt = with_spinner(
        "Sending message...",
        "submission failed",
        ctx.client.submit_contact(&form),
    )
    .await?;
    acknowledge(&receipt, "contact enquiry", "Message sent successfully!", flags)
}

async fn enquire(args: &EnquiryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = enquiry_form(args);
    let receipt = with_spinner(
        "Sending enquiry...",
        "submission failed",
        ctx.client.submit_internship_enquiry(&form),
    )
    .await?;
    acknowledge(&receipt, "internship enquiry", "Enquiry sent successfully!", flags)
}

fn acknowledge(
    receipt: &Receipt,
    submitted: &'static str,
    default_message: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(
        &EnquiryResponse {
            submitted,
            id: receipt.i64_field("id"),
            message: receipt.message().unwrap_or(default_message).to_string(),
        },
        flags.format,
    )
}

fn contact_form(args: &ContactArgs) -> ContactEnquiryForm {
    let EnquirerArgs { first_name, last_name, email, message } = &args.enquirer;
    ContactEnquiryForm {
        fname: first_name.clone(),
        lname: last_name.clone(),
        email: email.clone(),
        mobile: args.mobile.clone(),
        message: message.clone(),
    }
}

fn enquiry_form(args: &EnquiryArgs) -> InternshipEnquiryForm {
    let EnquirerArgs { first_name, last_name, email, message } = &args.enquirer;
    InternshipEnquiryForm {
        fname: first_name.clone(),
        lname: last_name.clone(),
        email: email.clone(),
        mobile: args.mobile.clone(),
        internship: args.role.clone(),
        message: message.clone(),
        cv: args.cv.clone(),
    }
}

fn finish(
    receipt: &Receipt,
    submitted: &'static str,
    slug: &str,
    reference_key: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(
        &SubmitResponse {
            submitted,
            slug: slug.to_string(),
            reference: receipt.str_field(reference_key).map(ToString::to_string),
            message: receipt.message().map(ToString::to_string),
        },
        flags.format,
    )
}

fn apply_billing(
    billing: &BillingArgs,
    gstin: &mut String,
    address: &mut String,
    landmark: &mut String,
    district: &mut String,
    state: &mut String,
) {
    set(gstin, billing.gstin.as_ref());
    set(address, billing.billing_address.as_ref());
    set(landmark, billing.landmark.as_ref());
    set(district, billing.district.as_ref());
    set(state, billing.state.as_ref());
}

fn application_form(args: &InternshipApplyArgs) -> anyhow::Result<InternshipApplicationForm> {
    let motivation = match (&args.motivation, &args.motivation_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => String::new(),
    };

    let mut form = InternshipApplicationForm {
        fname: args.first_name.clone(),
        lname: args.last_name.clone(),
        email: args.email.clone(),
        mobile: args.mobile.clone(),
        motivation,
        validation_code: args.code.clone(),
        resume: Some(args.resume.clone()),
        ..InternshipApplicationForm::default()
    };
    set(&mut form.experience_level, args.experience_level.as_ref());
    set(&mut form.portfolio_url, args.portfolio_url.as_ref());
    set(&mut form.github_url, args.github_url.as_ref());
    set(&mut form.preferred_start_date, args.start_date.as_ref());
    set(&mut form.preferred_time, args.preferred_time.as_ref());
    set(&mut form.availability, args.availability.as_ref());
    apply_billing(
        &args.billing,
        &mut form.gstin,
        &mut form.billing_address,
        &mut form.landmark,
        &mut form.district,
        &mut form.state,
    );
    Ok(form)
}

fn course_payment_form(args: &CoursePayArgs) -> anyhow::Result<CoursePaymentForm> {
    let mut form = CoursePaymentForm {
        name: args.name.clone(),
        email: args.email.clone(),
        mobile: args.mobile.clone(),
        validation_code: args.code.clone(),
        payment_method: parse_value::<PaymentMethod>(&args.method, "payment method")?,
        payment_screenshot: args.screenshot.clone(),
        ..CoursePaymentForm::default()
    };
    set(&mut form.start_date, args.start_date.as_ref());
    set(&mut form.training_mode, args.training_mode.as_ref());
    set(&mut form.batch_preference, args.batch.as_ref());
    apply_billing(
        &args.billing,
        &mut form.gstin,
        &mut form.billing_address,
        &mut form.landmark,
        &mut form.district,
        &mut form.state,
    );
    Ok(form)
}

fn project_enrollment_form(args: &ProjectEnrollArgs) -> anyhow::Result<ProjectEnrollmentForm> {
    let mut form = ProjectEnrollmentForm {
        name: args.name.clone(),
        email: args.email.clone(),
        mobile: args.mobile.clone(),
        validation_code: args.code.clone(),
        payment_method: parse_value::<PaymentMethod>(&args.method, "payment method")?,
        payment_screenshot: args.screenshot.clone(),
        ..ProjectEnrollmentForm::default()
    };
    set(&mut form.team_size, args.team_size.as_ref());
    set(&mut form.preferred_start_date, args.start_date.as_ref());
    set(&mut form.preferred_time, args.preferred_time.as_ref());
    apply_billing(
        &args.billing,
        &mut form.gstin,
        &mut form.billing_address,
        &mut form.landmark,
        &mut form.district,
        &mut form.state,
    );
    Ok(form)
}
