mod forms;
mod session;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::coach::{CoachBackend, CoachClient, SummarizeRequest, TipsRequest};
use crate::core::{
    Answers, EmiResult, FdResult, NEW_REGIME_FY2023_24, PpfResult, ProgressSummary,
    RetirementResult, SipResult, TaxBreakdown, TopicSlug, compute_emi, compute_fd_maturity,
    compute_ppf_maturity, compute_required_monthly_saving, compute_retirement_corpus,
    compute_sip_future_value, compute_tax_breakdown, fraud_scenarios, get_topic, grade,
    topic_overviews,
};
use crate::error::{Error, Result};

pub use forms::{
    EmiForm, EmiPayload, FdForm, FdPayload, PpfForm, PpfPayload, RetirementForm,
    RetirementPayload, SavingsForm, SavingsPayload, SipForm, SipPayload, TaxPayload,
};
pub use session::SessionStore;

/// Header carrying the id returned by `/api/session/login`.
pub const SESSION_HEADER: &str = "x-session-id";

const TIPS_FAILED: &str = "Failed to generate tips from AI model.";
const SUMMARY_FAILED: &str = "Failed to summarize article.";
const MAX_NAME_CHARS: usize = 64;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub coach: Option<CoachClient>,
}

impl AppState {
    pub fn new(coach: Option<CoachClient>) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new()),
            coach,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsResponse {
    pub monthly_saving: f64,
}

#[derive(Debug, Deserialize)]
struct QuizSubmission {
    answers: Answers,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizResponse {
    slug: TopicSlug,
    score: usize,
    total: usize,
    percentage: u8,
    /// Best percentage stored for the session; absent for anonymous grading.
    best_percentage: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct LoginPayload {
    name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    session_id: String,
    user_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressResponse {
    user_name: String,
    #[serde(flatten)]
    summary: ProgressSummary,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/calculators/emi",
            get(emi_get_handler).post(emi_post_handler),
        )
        .route(
            "/api/calculators/sip",
            get(sip_get_handler).post(sip_post_handler),
        )
        .route(
            "/api/calculators/fd",
            get(fd_get_handler).post(fd_post_handler),
        )
        .route(
            "/api/calculators/ppf",
            get(ppf_get_handler).post(ppf_post_handler),
        )
        .route(
            "/api/calculators/retirement",
            get(retirement_get_handler).post(retirement_post_handler),
        )
        .route(
            "/api/calculators/tax",
            get(tax_get_handler).post(tax_post_handler),
        )
        .route(
            "/api/calculators/savings",
            get(savings_get_handler).post(savings_post_handler),
        )
        .route("/api/topics", get(list_topics_handler))
        .route("/api/topics/:slug", get(topic_handler))
        .route("/api/topics/:slug/quiz", post(submit_quiz_handler))
        .route("/api/fraud-scenarios", get(fraud_scenarios_handler))
        .route("/api/session/login", post(login_handler))
        .route("/api/session/logout", post(logout_handler))
        .route("/api/progress", get(progress_handler))
        .route("/api/coach/tips", post(tips_handler))
        .route("/api/coach/summarize", post(summarize_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_http_server(port: u16, coach: Option<CoachClient>) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    match &coach {
        Some(client) => info!(model = client.model(), host = client.host(), "Coach backend ready"),
        None => warn!("No coach backend configured; /api/coach endpoints will return 503"),
    }
    let app = create_router(AppState::new(coach));

    let listener = TcpListener::bind(addr).await?;
    info!("DhanRakshak HTTP API listening on http://{addr}");
    info!("Local access: http://127.0.0.1:{port}/api/topics");

    axum::serve(listener, app).await
}

pub fn emi(payload: EmiPayload) -> Result<EmiResult> {
    let form = EmiForm::try_from(payload)?;
    compute_emi(form.principal, form.rate, form.tenure)
}

pub fn sip(payload: SipPayload) -> Result<SipResult> {
    let form = SipForm::try_from(payload)?;
    compute_sip_future_value(form.monthly_investment, form.return_rate, form.period)
}

pub fn fd(payload: FdPayload) -> Result<FdResult> {
    let form = FdForm::try_from(payload)?;
    compute_fd_maturity(form.principal, form.rate, form.tenure, form.compounding)
}

pub fn ppf(payload: PpfPayload) -> Result<PpfResult> {
    let form = PpfForm::try_from(payload)?;
    compute_ppf_maturity(form.yearly_investment, form.rate, form.period)
}

pub fn retirement(payload: RetirementPayload) -> Result<RetirementResult> {
    let form = RetirementForm::try_from(payload)?;
    compute_retirement_corpus(
        form.current_age,
        form.retirement_age,
        form.monthly_savings,
        form.return_rate,
    )
}

pub fn tax(payload: TaxPayload) -> Result<TaxBreakdown> {
    compute_tax_breakdown(payload.annual_income()?, &NEW_REGIME_FY2023_24)
}

pub fn savings(payload: SavingsPayload) -> Result<SavingsResponse> {
    let form = SavingsForm::try_from(payload)?;
    let monthly_saving =
        compute_required_monthly_saving(form.goal_amount, form.initial_amount, form.years)?;
    Ok(SavingsResponse { monthly_saving })
}

async fn emi_get_handler(Query(payload): Query<EmiPayload>) -> Response {
    respond(emi(payload))
}

async fn emi_post_handler(Json(payload): Json<EmiPayload>) -> Response {
    respond(emi(payload))
}

async fn sip_get_handler(Query(payload): Query<SipPayload>) -> Response {
    respond(sip(payload))
}

async fn sip_post_handler(Json(payload): Json<SipPayload>) -> Response {
    respond(sip(payload))
}

async fn fd_get_handler(Query(payload): Query<FdPayload>) -> Response {
    respond(fd(payload))
}

async fn fd_post_handler(Json(payload): Json<FdPayload>) -> Response {
    respond(fd(payload))
}

async fn ppf_get_handler(Query(payload): Query<PpfPayload>) -> Response {
    respond(ppf(payload))
}

async fn ppf_post_handler(Json(payload): Json<PpfPayload>) -> Response {
    respond(ppf(payload))
}

async fn retirement_get_handler(Query(payload): Query<RetirementPayload>) -> Response {
    respond(retirement(payload))
}

async fn retirement_post_handler(Json(payload): Json<RetirementPayload>) -> Response {
    respond(retirement(payload))
}

async fn tax_get_handler(Query(payload): Query<TaxPayload>) -> Response {
    respond(tax(payload))
}

async fn tax_post_handler(Json(payload): Json<TaxPayload>) -> Response {
    respond(tax(payload))
}

async fn savings_get_handler(Query(payload): Query<SavingsPayload>) -> Response {
    respond(savings(payload))
}

async fn savings_post_handler(Json(payload): Json<SavingsPayload>) -> Response {
    respond(savings(payload))
}

async fn list_topics_handler() -> Response {
    json_response(StatusCode::OK, topic_overviews())
}

async fn topic_handler(Path(slug): Path<String>) -> Response {
    respond(get_topic(&slug))
}

async fn fraud_scenarios_handler() -> Response {
    json_response(StatusCode::OK, fraud_scenarios())
}

async fn submit_quiz_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
    Json(submission): Json<QuizSubmission>,
) -> Response {
    let topic = match get_topic(&slug) {
        Ok(topic) => topic,
        Err(err) => return api_error(&err),
    };

    let session = session_id(&headers);
    if let Some(id) = session {
        if !state.sessions.contains(id) {
            return unauthorized();
        }
    }

    let outcome = match grade(&submission.answers, topic.quiz) {
        Ok(outcome) => outcome,
        Err(err) => return api_error(&err),
    };

    let best_percentage = match session {
        Some(id) => match state
            .sessions
            .record_quiz_result(id, topic.slug, outcome.percentage)
        {
            Some(best) => Some(best),
            // Logged out between the check and the merge.
            None => return unauthorized(),
        },
        None => None,
    };
    debug!(
        topic = %topic.slug,
        score = outcome.score,
        percentage = outcome.percentage,
        "Quiz graded"
    );

    json_response(
        StatusCode::OK,
        QuizResponse {
            slug: topic.slug,
            score: outcome.score,
            total: outcome.total,
            percentage: outcome.percentage,
            best_percentage,
        },
    )
}

async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Response {
    let user_name = payload.name.trim();
    if user_name.is_empty() {
        return api_error(&Error::validation("name", "Name is required."));
    }
    if user_name.chars().count() > MAX_NAME_CHARS {
        return api_error(&Error::validation(
            "name",
            format!("Name must be at most {MAX_NAME_CHARS} characters."),
        ));
    }
    let session_id = state.sessions.login(user_name);
    info!(
        user = user_name,
        active_sessions = state.sessions.len(),
        "Session started"
    );
    json_response(
        StatusCode::OK,
        LoginResponse {
            session_id,
            user_name: user_name.to_string(),
        },
    )
}

async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(id) = session_id(&headers) else {
        return unauthorized();
    };
    match state.sessions.logout(id) {
        Some(_) => {
            info!("Session ended");
            with_cache_control(StatusCode::NO_CONTENT)
        }
        None => unauthorized(),
    }
}

async fn progress_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some((user_name, summary)) = session_id(&headers).and_then(|id| state.sessions.summary(id))
    else {
        return unauthorized();
    };
    json_response(StatusCode::OK, ProgressResponse { user_name, summary })
}

async fn tips_handler(State(state): State<AppState>, Json(request): Json<TipsRequest>) -> Response {
    let Some(coach) = state.coach.as_ref() else {
        return coach_unavailable();
    };
    match coach.tips(&request).await {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(Error::GenerationFailed(detail)) => {
            error!(error = %detail, model = coach.model(), "Tip generation failed");
            error_response(StatusCode::BAD_GATEWAY, TIPS_FAILED)
        }
        Err(err) => api_error(&err),
    }
}

async fn summarize_handler(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Response {
    let Some(coach) = state.coach.as_ref() else {
        return coach_unavailable();
    };
    match coach.summary(&request).await {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(Error::GenerationFailed(detail)) => {
            error!(error = %detail, model = coach.model(), "Article summarization failed");
            error_response(StatusCode::BAD_GATEWAY, SUMMARY_FAILED)
        }
        Err(err) => api_error(&err),
    }
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

fn respond<T: Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => api_error(&err),
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        Error::Validation { .. } | Error::IncompleteSubmission { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
    }
}

fn api_error(err: &Error) -> Response {
    let status = status_for(err);
    match err {
        Error::InvalidInput(msg) => warn!(error = %msg, "Rejected invalid input"),
        other => debug!(error = %other, "Request failed"),
    }
    let message = match err {
        Error::Validation { message, .. } => message.clone(),
        Error::IncompleteSubmission { .. } => {
            "Please answer all questions before submitting.".to_string()
        }
        other => other.to_string(),
    };
    json_response(
        status,
        ErrorResponse {
            error: message,
            field: err.field(),
        },
    )
}

fn unauthorized() -> Response {
    error_response(StatusCode::UNAUTHORIZED, "Unknown or missing session")
}

fn coach_unavailable() -> Response {
    error_response(StatusCode::SERVICE_UNAVAILABLE, "Coach is not configured.")
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
            field: None,
        },
    )
}
