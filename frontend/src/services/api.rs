use gloo::net::http::{Request, Response};
use thiserror::Error;

use chrono::NaiveDate;
use shared::{
    AnamnesisQuestion, Appointment, AppointmentStatus, AvailabilitySlot, Block, BookingSlot,
    CreateAnamnesisQuestionRequest, CreateAppointmentRequest, CreateAvailabilityRequest,
    CreateBlockRequest, CreatePatientRequest, DeleteBlocksRequest, ErrorResponse, Patient,
    ReorderAvailabilitiesRequest, SubmitAnamnesisRequest, UpdateAppointmentStatusRequest,
};

/// Errors surfaced by the API client. Each one ends up as a toast at the
/// triggering call site; there are no retries and no timeouts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    /// The backend rejected the request; the message is the first
    /// field-level validation message, or the generic one.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Client for the scheduling backend. All endpoint knowledge lives here;
/// pages receive a client instead of building URLs themselves.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client against the default backend address.
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a client against a custom backend address.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into `ApiError::Rejected`, extracting the
    /// first validation message from the error envelope when there is one.
    async fn expect_ok(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body
                .first_message()
                .unwrap_or("The request was rejected")
                .to_string(),
            Err(_) => "The request was rejected".to_string(),
        };
        Err(ApiError::Rejected { status, message })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::expect_ok(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // --- Availabilities ---

    pub async fn list_availabilities(&self) -> Result<Vec<AvailabilitySlot>, ApiError> {
        self.get_json("/availabilities").await
    }

    pub async fn create_availability(
        &self,
        request: &CreateAvailabilityRequest,
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/availabilities"))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    pub async fn delete_availability(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/availabilities/{}", id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    /// Persist a new display order. The body carries the complete id list;
    /// there are no delta updates.
    pub async fn reorder_availabilities(&self, ids: Vec<i64>) -> Result<(), ApiError> {
        let request = ReorderAvailabilitiesRequest { ids };
        let response = Request::put(&self.url("/availabilities/reorder"))
            .json(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    // --- Blocks ---

    pub async fn list_blocks(&self) -> Result<Vec<Block>, ApiError> {
        self.get_json("/blocks").await
    }

    pub async fn create_block(&self, request: &CreateBlockRequest) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/blocks"))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    pub async fn delete_block(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/blocks/{}", id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    pub async fn delete_blocks(&self, ids: Vec<i64>) -> Result<(), ApiError> {
        let request = DeleteBlocksRequest { ids };
        let response = Request::delete(&self.url("/blocks"))
            .json(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    // --- Appointments ---

    pub async fn list_appointments(&self, date: &str) -> Result<Vec<Appointment>, ApiError> {
        self.get_json(&format!("/appointments?date={}", date)).await
    }

    pub async fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<(), ApiError> {
        let request = UpdateAppointmentStatusRequest { status };
        let response = Request::patch(&self.url(&format!("/appointments/{}", id)))
            .json(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    // --- Public booking ---

    pub async fn booking_slots(&self, date: NaiveDate) -> Result<Vec<BookingSlot>, ApiError> {
        self.get_json(&format!("/booking/slots?date={}", date)).await
    }

    pub async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/appointments"))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    // --- Patients & anamnesis ---

    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.get_json("/patients").await
    }

    pub async fn create_patient(&self, request: &CreatePatientRequest) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/patients"))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    pub async fn list_anamnesis_questions(&self) -> Result<Vec<AnamnesisQuestion>, ApiError> {
        self.get_json("/anamnesis/questions").await
    }

    pub async fn create_anamnesis_question(&self, text: String) -> Result<(), ApiError> {
        let request = CreateAnamnesisQuestionRequest { text };
        let response = Request::post(&self.url("/anamnesis/questions"))
            .json(&request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    pub async fn delete_anamnesis_question(&self, id: i64) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/anamnesis/questions/{}", id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    pub async fn submit_anamnesis(
        &self,
        patient_id: i64,
        request: &SubmitAnamnesisRequest,
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.url(&format!("/patients/{}/anamnesis", patient_id)))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
