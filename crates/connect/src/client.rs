//! HTTP client for the PostureKit assessment backend.
//!
//! This is the single point of contact with the backend: it owns bearer
//! token attachment, the fixed request timeout, and the global 401 side
//! effect. Every endpoint surfaces as a method of one of the core API
//! traits, so the resource layer never sees HTTP.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use posturekit_core::assessments::{
    Assessment, AssessmentFilter, AssessmentProgress, AssessmentsApi, NewAssessment,
};
use posturekit_core::auth::{AuthApi, AuthResponse, Credentials, Registration};
use posturekit_core::errors::{Error, Result, ValidationError};
use posturekit_core::media::{MediaUpload, UploadsApi};
use posturekit_core::pagination::Page;
use posturekit_core::patients::{NewPatient, Patient, PatientQuery, PatientUpdate, PatientsApi};
use posturekit_core::plans::{Plan, PlansApi};
use posturekit_core::professionals::{
    DashboardStats, Professional, ProfessionalsApi, ProfileUpdate,
};
use posturekit_core::reports::{Report, ReportsApi, ShareGrant};
use posturekit_core::session::Session;

use crate::config::ConnectConfig;

/// Callback fired after a 401 response has cleared the session; the host
/// navigates to its login screen here.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Error body shape the backend uses for non-2xx responses.
#[allow(dead_code)]
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the PostureKit backend.
///
/// # Example
///
/// ```ignore
/// let session = Arc::new(Session::ephemeral());
/// let client = ApiClient::new(&ConnectConfig::from_env(), session)?;
/// let plans = client.list_plans().await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient {
    /// Creates a new client against `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// initialized.
    pub fn new(config: &ConnectConfig, session: Arc<Session>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            on_unauthorized: None,
        })
    }

    /// Registers the navigation callback fired on any 401 response.
    pub fn with_unauthorized_hook(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = Some(hook);
        self
    }

    pub fn session(&self) -> Arc<Session> {
        self.session.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Option<HeaderValue> {
        let token = self.session.token()?;
        HeaderValue::from_str(&format!("Bearer {}", token)).ok()
    }

    /// Default headers for JSON requests, with the bearer token when the
    /// session holds one.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(value) = self.bearer() {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("[Api] GET {}", url);
        let response = self
            .http
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(Error::from)?;
        self.parse_response(response).await
    }

    async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("[Api] GET {}", url);
        let response = self
            .http
            .get(&url)
            .headers(self.headers())
            .query(query)
            .send()
            .await
            .map_err(Error::from)?;
        self.parse_response(response).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("[Api] POST {}", url);
        let response = self
            .http
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(Error::from)?;
        self.parse_response(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("[Api] POST {}", url);
        let response = self
            .http
            .post(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(Error::from)?;
        self.parse_response(response).await
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("[Api] PUT {}", url);
        let response = self
            .http
            .put(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(Error::from)?;
        self.parse_response(response).await
    }

    /// Parses an HTTP response, applying the global 401 side effect and
    /// mapping non-2xx statuses to [`Error::Api`].
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Decode(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.message.or(parsed.error))
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        format!("HTTP {}", status)
                    } else {
                        body.chars().take(200).collect()
                    }
                });
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            Error::Decode(format!(
                "Failed to parse response: {} - {}",
                e,
                body.chars().take(200).collect::<String>()
            ))
        })
    }

    /// The global 401 side effect: clear the session and tell the host to
    /// navigate to its login screen. Runs once per 401 response; callers
    /// cannot opt out.
    fn handle_unauthorized(&self) {
        info!("[Api] 401 received, clearing session");
        if let Err(err) = self.session.clear_token() {
            warn!("[Api] failed to clear session token: {}", err);
        }
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let response: AuthResponse = self.post("/auth/login", credentials).await?;
        self.session.set_token(&response.access_token)?;
        Ok(response)
    }

    async fn register(&self, registration: &Registration) -> Result<AuthResponse> {
        let response: AuthResponse = self.post("/auth/register", registration).await?;
        self.session.set_token(&response.access_token)?;
        Ok(response)
    }

    /// Sign-out is client-side only: the backend holds no session state.
    async fn logout(&self) -> Result<()> {
        self.session.clear_token()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Professionals & dashboard
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ProfessionalsApi for ApiClient {
    async fn get_profile(&self) -> Result<Professional> {
        self.get("/professionals/me").await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Professional> {
        self.put("/professionals/me", update).await
    }

    async fn get_dashboard(&self) -> Result<DashboardStats> {
        self.get("/professionals/dashboard").await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Patients
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PatientsApi for ApiClient {
    async fn list_patients(&self, query: &PatientQuery) -> Result<Page<Patient>> {
        let params = [
            ("search", query.search.clone().unwrap_or_default()),
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        self.get_with_query("/patients", &params).await
    }

    async fn get_patient(&self, id: &str) -> Result<Patient> {
        self.get(&format!("/patients/{}", id)).await
    }

    async fn create_patient(&self, record: &NewPatient) -> Result<Patient> {
        record.validate()?;
        self.post("/patients", record).await
    }

    async fn update_patient(&self, id: &str, update: &PatientUpdate) -> Result<Patient> {
        update.validate()?;
        self.put(&format!("/patients/{}", id), update).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Assessments
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl AssessmentsApi for ApiClient {
    async fn list_assessments(&self, filter: &AssessmentFilter) -> Result<Page<Assessment>> {
        let mut params: Vec<(&str, String)> = vec![
            ("page", filter.page.to_string()),
            ("limit", filter.limit.to_string()),
        ];
        if let Some(patient_id) = &filter.patient_id {
            params.push(("patientId", patient_id.clone()));
        }
        if let Some(status) = filter.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(assessment_type) = filter.assessment_type {
            params.push(("type", assessment_type.as_str().to_string()));
        }
        self.get_with_query("/assessments", &params).await
    }

    async fn get_assessment(&self, id: &str) -> Result<Assessment> {
        self.get(&format!("/assessments/{}", id)).await
    }

    async fn create_assessment(&self, request: &NewAssessment) -> Result<Assessment> {
        request.validate()?;
        self.post("/assessments", request).await
    }

    async fn get_assessment_status(&self, id: &str) -> Result<AssessmentProgress> {
        self.get(&format!("/assessments/{}/status", id)).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reports
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ReportsApi for ApiClient {
    async fn get_report(&self, id: &str) -> Result<Report> {
        self.get(&format!("/reports/{}", id)).await
    }

    async fn share_report(&self, id: &str) -> Result<ShareGrant> {
        self.post_empty(&format!("/reports/{}/share", id)).await
    }

    async fn get_shared_report(&self, token: &str) -> Result<Report> {
        self.get(&format!("/reports/share/{}", token)).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Uploads
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl UploadsApi for ApiClient {
    async fn upload_media(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaUpload> {
        let url = self.url("/upload/media");
        debug!("[Api] POST {} ({} bytes)", url, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Invalid media type: {}",
                    e
                )))
            })?;
        let form = Form::new().part("file", part);

        let mut request = self.http.post(&url).multipart(form);
        if let Some(value) = self.bearer() {
            request = request.header(AUTHORIZATION, value);
        }
        let response = request.send().await.map_err(Error::from)?;
        self.parse_response(response).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plans
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PlansApi for ApiClient {
    async fn list_plans(&self) -> Result<Vec<Plan>> {
        self.get("/plans").await
    }
}
