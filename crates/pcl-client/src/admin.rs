//! Bearer-authenticated dashboard calls under `/admin`.

use pcl_core::dashboard::TabData;
use pcl_core::entities::{
    AdminUser, Course, Internship, InternshipApplication, Payment, Project, ProjectEnrollment,
};
use pcl_core::enums::DashboardTab;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::http::read_envelope;
use crate::multipart::build_form;
use crate::resource::{AdminResource, DeletableResource, EditableResource, StatusResource, decode_list};
use crate::{ApiClient, ClientError, Receipt};

/// Successful `/admin/login` result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub access_token: String,
    pub admin: Option<AdminUser>,
}

#[derive(Deserialize)]
struct LoginBody {
    access_token: String,
    #[serde(default)]
    admin: Option<AdminUser>,
}

impl ApiClient {
    /// Exchange admin credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with the server's message ("Invalid
    /// credentials") when the login is refused.
    pub async fn login(&self, username: &str, password: &str) -> Result<Login, ClientError> {
        let resp = self
            .http
            .post(self.url("/admin/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        let body = read_envelope(resp, "Login failed").await?;
        let parsed: LoginBody = serde_json::from_value(Value::Object(body))
            .map_err(|e| ClientError::Parse(format!("login response: {e}")))?;
        tracing::debug!(username, "admin login succeeded");
        Ok(Login {
            access_token: parsed.access_token,
            admin: parsed.admin,
        })
    }

    /// Fetch every record of `T` from `GET /admin/<T::PATH>`.
    ///
    /// Records that fail to decode are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the envelope is not
    /// successful.
    pub async fn fetch_all<T: AdminResource>(&self) -> Result<Vec<T>, ClientError> {
        let request = self.authed(self.http.get(self.url(&format!("/admin/{}", T::PATH))))?;
        let resp = request.send().await?;
        let mut body = read_envelope(resp, &format!("Failed to fetch {}", T::LABEL)).await?;
        decode_list(&mut body, T::LIST_KEY).map_err(ClientError::Parse)
    }

    /// Fetch the collection behind a dashboard tab.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the fetch fails; see [`Self::fetch_all`].
    pub async fn fetch_tab(&self, tab: DashboardTab) -> Result<TabData, ClientError> {
        Ok(match tab {
            DashboardTab::Courses => TabData::Courses(self.fetch_all::<Course>().await?),
            DashboardTab::Payments => TabData::Payments(self.fetch_all::<Payment>().await?),
            DashboardTab::Internships => {
                TabData::Internships(self.fetch_all::<Internship>().await?)
            }
            DashboardTab::Projects => TabData::Projects(self.fetch_all::<Project>().await?),
            DashboardTab::ProjectPayments => {
                TabData::ProjectPayments(self.fetch_all::<ProjectEnrollment>().await?)
            }
            DashboardTab::InternshipEnrollments => {
                TabData::InternshipEnrollments(self.fetch_all::<InternshipApplication>().await?)
            }
        })
    }

    /// Create (`id == None`, `POST`) or update (`PUT /:id`) a catalog entity.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Invalid`] if the draft does not validate (no
    /// request is sent), or the server's error otherwise.
    pub async fn save<T: EditableResource>(
        &self,
        id: Option<i64>,
        draft: &T::Draft,
    ) -> Result<Receipt, ClientError> {
        let payload = T::payload(draft)?;
        let form = build_form(&payload).await?;
        let request = match id {
            Some(id) => self.http.put(self.url(&format!("/admin/{}/{id}", T::PATH))),
            None => self.http.post(self.url(&format!("/admin/{}", T::PATH))),
        };
        let resp = self.authed(request)?.multipart(form).send().await?;
        let body = read_envelope(resp, &format!("Failed to save {}", T::NOUN)).await?;
        tracing::info!(resource = T::PATH, ?id, "saved");
        Ok(Receipt::new(body))
    }

    /// `DELETE /admin/<T::PATH>/:id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] with the server's message on failure.
    pub async fn delete<T: DeletableResource>(&self, id: i64) -> Result<Receipt, ClientError> {
        let request = self.authed(self.http.delete(self.url(&format!("/admin/{}/{id}", T::PATH))))?;
        let resp = request.send().await?;
        let body = read_envelope(resp, &format!("Failed to delete {}", T::NOUN)).await?;
        tracing::info!(resource = T::PATH, id, "deleted");
        Ok(Receipt::new(body))
    }

    /// `PUT /admin/<T::PATH>/:id/status` with `{"status": ...}`.
    ///
    /// The backend accepts any status; transition rules are enforced by the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] with the server's message on failure.
    pub async fn update_status<T: StatusResource>(
        &self,
        id: i64,
        status: T::Status,
    ) -> Result<Receipt, ClientError> {
        let request =
            self.authed(self.http.put(self.url(&format!("/admin/{}/{id}/status", T::PATH))))?;
        let resp = request.json(&json!({ "status": status })).send().await?;
        let body =
            read_envelope(resp, &format!("Failed to update {} status", T::NOUN)).await?;
        tracing::info!(resource = T::PATH, id, %status, "status updated");
        Ok(Receipt::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn login_body_parses_admin() {
        let parsed: LoginBody = serde_json::from_value(json!({
            "success": true,
            "access_token": "eyJ.x.y",
            "admin": {"id": 1, "username": "admin", "email": null}
        }))
        .unwrap();
        assert_eq!(parsed.access_token, "eyJ.x.y");
        assert_eq!(parsed.admin.map(|a| a.username), Some("admin".to_string()));
    }
}
