//! Remote generative assistant: recovery advice for patients and the
//! strategic summary on the admin dashboard.
//!
//! Remote failures never surface to callers. Every entry point resolves to
//! a fixed Portuguese fallback string when the model cannot answer, so the
//! portal keeps rendering with or without connectivity.

use serde::{Deserialize, Serialize};

use crate::models::Patient;

/// Model used for conversational recovery advice.
pub const ADVICE_MODEL: &str = "gemini-3-flash-preview";
/// Model used for the dashboard strategic summary.
pub const SUMMARY_MODEL: &str = "gemini-3-pro-preview";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Shown in the patient chat when the remote call fails.
pub const ADVICE_FALLBACK: &str =
    "O assistente está temporariamente indisponível. Por favor, contate a recepção da Urgetrauma.";
/// Shown on the admin dashboard when the remote call fails.
pub const SUMMARY_FALLBACK: &str = "Sumário estratégico indisponível no momento.";

// ─── Client trait ───────────────────────────────────────────

/// Errors from a remote generation attempt. Callers inside this module
/// swallow these into fallback strings; the type exists for logging and
/// for shells that want to probe connectivity directly.
#[derive(Debug, thiserror::Error)]
pub enum GenerativeError {
    #[error("No API key configured")]
    MissingApiKey,
    #[error("Cannot reach generative endpoint at {0}")]
    Connection(String),
    #[error("Generative endpoint returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Malformed response from generative endpoint")]
    MalformedResponse,
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// A text-in, text-out generation backend.
pub trait GenerativeClient: Send + Sync {
    fn generate(
        &self,
        model: &str,
        system: &str,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, GenerativeError>> + Send;
}

// ─── Gemini client ──────────────────────────────────────────

/// HTTP client for the Gemini `generateContent` API.
#[derive(Debug)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, GenerativeError> {
        if api_key.is_empty() {
            return Err(GenerativeError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| GenerativeError::HttpClient(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Client configured from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, GenerativeError> {
        let key = std::env::var("GEMINI_API_KEY").map_err(|_| GenerativeError::MissingApiKey)?;
        Self::new(DEFAULT_BASE_URL, &key)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

impl GenerativeClient for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        system: &str,
        prompt: &str,
    ) -> Result<String, GenerativeError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: Content {
                parts: vec![Part { text: system }],
            },
        };

        let response = self.client.post(&url).json(&body).send().await.map_err(|e| {
            if e.is_connect() {
                GenerativeError::Connection(self.base_url.clone())
            } else {
                GenerativeError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerativeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|_| GenerativeError::MalformedResponse)?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(GenerativeError::MalformedResponse)
    }
}

// ─── Portal entry points ────────────────────────────────────

/// Operational stats shown on the admin dashboard and fed to the
/// strategic-summary prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicStats {
    pub active_users_today: u32,
    pub conversion_rate: String,
    pub api_cost_month: String,
    pub nps_score: u32,
}

fn advice_system_prompt(patient: &Patient) -> String {
    let treatment = patient
        .active_treatment()
        .map(|t| format!("{} ({}% concluído)", t.title, t.progress))
        .unwrap_or_else(|| "sem tratamento ativo".to_string());
    format!(
        "Você é o assistente de recuperação da clínica Urgetrauma. \
         Responda em português, em tom acolhedor e breve. Não faça diagnósticos; \
         em caso de dor intensa, oriente a contatar a recepção. \
         Paciente: {}. Tratamento atual: {}.",
        patient.full_name(),
        treatment
    )
}

/// Recovery advice for the patient chat. Never fails: remote errors are
/// logged and replaced with [`ADVICE_FALLBACK`].
pub async fn recovery_advice<C: GenerativeClient>(
    client: &C,
    patient: &Patient,
    query: &str,
) -> String {
    let system = advice_system_prompt(patient);
    match client.generate(ADVICE_MODEL, &system, query).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Recovery advice call failed, serving fallback");
            ADVICE_FALLBACK.to_string()
        }
    }
}

/// Strategic summary for the admin dashboard. Never fails: remote errors
/// are logged and replaced with [`SUMMARY_FALLBACK`].
pub async fn clinical_summary<C: GenerativeClient>(client: &C, stats: &ClinicStats) -> String {
    let system = "Você é um analista de operações de clínicas de reabilitação. \
                  Produza um sumário estratégico curto, em português, com no \
                  máximo três frases.";
    let prompt = format!(
        "Usuários ativos hoje: {}. Taxa de conversão: {}. Custo de API no mês: {}. NPS: {}.",
        stats.active_users_today, stats.conversion_rate, stats.api_cost_month, stats.nps_score
    );
    match client.generate(SUMMARY_MODEL, system, &prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Strategic summary call failed, serving fallback");
            SUMMARY_FALLBACK.to_string()
        }
    }
}
