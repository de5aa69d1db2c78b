//! Unauthenticated catalog reads and submissions under `/api`, plus the two
//! enquiry forms served from the backend root.

use pcl_core::form::MultipartPayload;
use pcl_core::validation::{
    ContactEnquiryForm, CoursePaymentForm, InternshipApplicationForm, InternshipEnquiryForm,
    ProjectEnrollmentForm,
};
use serde_json::Value;

use crate::http::{read_acknowledgement, read_envelope};
use crate::multipart::build_form;
use crate::resource::{CatalogResource, decode_list};
use crate::{ApiClient, ClientError, Receipt};

impl ApiClient {
    /// Active catalog entries from `GET /api/<T::PATH>`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the envelope is not
    /// successful.
    pub async fn list_catalog<T: CatalogResource>(&self) -> Result<Vec<T>, ClientError> {
        let resp = self.http.get(self.url(&format!("/api/{}", T::PATH))).send().await?;
        let mut body = read_envelope(resp, &format!("Failed to fetch {}", T::PATH)).await?;
        decode_list(&mut body, T::LIST_KEY).map_err(ClientError::Parse)
    }

    /// One catalog entry by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with "<Noun> not found" for unknown slugs.
    pub async fn get_catalog<T: CatalogResource>(&self, slug: &str) -> Result<T, ClientError> {
        let url = self.url(&format!("/api/{}/{}", T::PATH, urlencoding::encode(slug)));
        let resp = self.http.get(url).send().await?;
        let mut body = read_envelope(resp, &format!("{} not found", T::NOUN)).await?;
        let item = body
            .remove(T::ITEM_KEY)
            .ok_or_else(|| ClientError::Parse(format!("response has no `{}`", T::ITEM_KEY)))?;
        serde_json::from_value(item).map_err(|e| ClientError::Parse(format!("{}: {e}", T::ITEM_KEY)))
    }

    /// Submit a course payment. Returns the backend's `payment_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Invalid`] without sending anything when the
    /// form does not validate.
    pub async fn submit_course_payment(
        &self,
        course_slug: &str,
        form: &CoursePaymentForm,
    ) -> Result<Receipt, ClientError> {
        let payload = form.to_payload(course_slug)?;
        self.submit("/api/payments", &payload, "Failed to submit payment request")
            .await
    }

    /// Submit an internship application. The receipt carries `enrollment_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Invalid`] without sending anything when the
    /// form does not validate.
    pub async fn submit_internship_application(
        &self,
        internship_slug: &str,
        form: &InternshipApplicationForm,
    ) -> Result<Receipt, ClientError> {
        let payload = form.to_payload(internship_slug)?;
        self.submit(
            "/api/internship-applications",
            &payload,
            "Failed to submit application",
        )
        .await
    }

    /// Submit a project enrollment. The receipt carries `enrollment_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Invalid`] without sending anything when the
    /// form does not validate.
    pub async fn submit_project_enrollment(
        &self,
        project_slug: &str,
        form: &ProjectEnrollmentForm,
    ) -> Result<Receipt, ClientError> {
        let payload = form.to_payload(project_slug)?;
        self.submit("/api/project-enrollments", &payload, "Failed to submit enrollment")
            .await
    }

    /// Send the contact form as JSON to `POST /pclinfo`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Invalid`] without sending anything when the
    /// form does not validate, or [`ClientError::Api`] when the backend
    /// refuses it.
    pub async fn submit_contact(&self, form: &ContactEnquiryForm) -> Result<Receipt, ClientError> {
        let body = form.to_body()?;
        let resp = self.http.post(self.url("/pclinfo")).json(&body).send().await?;
        let body = read_acknowledgement(resp, "Something went wrong. Please try again.").await?;
        tracing::info!(path = "/pclinfo", "submitted");
        Ok(Receipt::new(body))
    }

    /// Send a quick internship enquiry as multipart to `POST /internship`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Invalid`] without sending anything when the
    /// form does not validate.
    pub async fn submit_internship_enquiry(
        &self,
        form: &InternshipEnquiryForm,
    ) -> Result<Receipt, ClientError> {
        let payload = form.to_payload()?;
        let multipart = build_form(&payload).await?;
        let resp = self.http.post(self.url("/internship")).multipart(multipart).send().await?;
        let body = read_acknowledgement(resp, "Submission failed.").await?;
        tracing::info!(path = "/internship", "submitted");
        Ok(Receipt::new(body))
    }

    async fn submit(
        &self,
        path: &str,
        payload: &MultipartPayload,
        fallback: &str,
    ) -> Result<Receipt, ClientError> {
        let form = build_form(payload).await?;
        let resp = self.http.post(self.url(path)).multipart(form).send().await?;
        let body = read_envelope(resp, fallback).await?;
        tracing::info!(path, "submitted");
        Ok(Receipt::new(body))
    }

    /// `GET /health`. Returns the reported status string.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<String, ClientError> {
        let resp = self.http.get(self.url("/health")).send().await?;
        if !resp.status().is_success() {
            return Err(ClientError::Api {
                status: resp.status().as_u16(),
                message: "Backend is unhealthy".to_string(),
            });
        }
        let body: Value = resp.json().await?;
        Ok(body["status"].as_str().unwrap_or("unknown").to_string())
    }
}
