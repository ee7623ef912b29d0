use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::{AcademyConfig, DashboardStats, Envelope, NewPayment, NewPerson, Payment, Person};

use crate::error::{extract_detail, ApiError};

/// Typed client for the academy REST backend.
///
/// Cheap to clone; the inner `reqwest::Client` is reference counted.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AcademyConfig) -> Self {
        Self::new(&config.api.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("api request: {} {}", method, url);
        self.http.request(method, url)
    }

    /// Send and map non-success statuses to [`ApiError::Status`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        tracing::warn!(status = status.as_u16(), ?detail, "api error response");
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(request).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Vec<T>, ApiError> {
        let value: Value = self.fetch(request).await?;
        decode_collection(value)
    }

    /// Send a write. A success status means the backend committed it, so a
    /// body that does not decode as `T` yields `Ok(None)` rather than an error.
    async fn submit<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        let response = self.send(self.request(method, path).json(body)).await?;
        let text = response.text().await?;
        match serde_json::from_str(&text) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(path, error = %e, "write succeeded but response did not decode");
                Ok(None)
            }
        }
    }

    /// `GET /students/`: every person, students and teachers alike.
    pub async fn list_people(&self) -> Result<Vec<Person>, ApiError> {
        self.fetch_collection(self.request(Method::GET, "/students/"))
            .await
    }

    /// `GET /students/{id}`
    pub async fn get_person(&self, id: i64) -> Result<Person, ApiError> {
        self.fetch(self.request(Method::GET, &format!("/students/{id}")))
            .await
    }

    /// Look a person up by id, falling back to scanning the full list when the
    /// single-record endpoint fails. `Ok(None)` means nobody has that id.
    pub async fn find_person(&self, id: i64) -> Result<Option<Person>, ApiError> {
        match self.get_person(id).await {
            Ok(person) => Ok(Some(person)),
            Err(e) => {
                tracing::warn!(id, error = %e, "single-person fetch failed, scanning list");
                let people = self.list_people().await?;
                Ok(people.into_iter().find(|p| p.user_id == id))
            }
        }
    }

    /// `POST /user`. `Ok(None)` when the created record could not be read back.
    pub async fn create_person(&self, person: &NewPerson) -> Result<Option<Person>, ApiError> {
        self.submit(Method::POST, "/user", person).await
    }

    /// `PUT /students/{id}`
    pub async fn update_person(
        &self,
        id: i64,
        person: &NewPerson,
    ) -> Result<Option<Person>, ApiError> {
        self.submit(Method::PUT, &format!("/students/{id}"), person)
            .await
    }

    /// `DELETE /students/{id}`. The response body is ignored.
    pub async fn delete_person(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("/students/{id}")))
            .await?;
        Ok(())
    }

    /// `GET /students/{id}/payments`
    pub async fn list_student_payments(&self, id: i64) -> Result<Vec<Payment>, ApiError> {
        self.fetch_collection(self.request(Method::GET, &format!("/students/{id}/payments")))
            .await
    }

    /// `GET /payments`
    pub async fn list_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.fetch_collection(self.request(Method::GET, "/payments"))
            .await
    }

    /// `POST /payments`
    pub async fn create_payment(&self, payment: &NewPayment) -> Result<Option<Payment>, ApiError> {
        self.submit(Method::POST, "/payments", payment).await
    }

    /// `GET /dashboard/stats`. Callers treat failure as "compute a fallback".
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.fetch(self.request(Method::GET, "/dashboard/stats"))
            .await
    }
}

/// Shapes a collection endpoint may answer with.
#[derive(Deserialize)]
#[serde(untagged)]
enum Collection<T> {
    Wrapped(Envelope<T>),
    Bare(Vec<T>),
}

/// Accept `{ "data": [...] }`, a bare array, or anything else as empty.
fn decode_collection<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    let listed = match &value {
        Value::Array(_) => true,
        Value::Object(map) => map.get("data").map_or(true, Value::is_array),
        _ => false,
    };
    if !listed {
        return Ok(Vec::new());
    }
    Ok(match serde_json::from_value(value)? {
        Collection::Wrapped(envelope) => envelope.data,
        Collection::Bare(items) => items,
    })
}
