use axum::{
    Json,
    extract::{
        Multipart, Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use isuumo_core::models::{ChairSearchParams, Coordinates, EstateSearchParams};
use isuumo_core::{Isuumo, IsuumoError};

use crate::WebState;
use crate::dto::{ContactRequest, RecommendedEstatesResponse};
use crate::error::{isuumo_error_response, recommendation_error_response};

pub async fn initialize(State(state): State<WebState>) -> Response {
    match run_blocking(&state, Isuumo::initialize).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => isuumo_error_response(err, "initialize"),
    }
}

pub async fn chair_detail(State(state): State<WebState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return isuumo_error_response(err, "chair.detail"),
    };
    match run_blocking(&state, move |app| app.chair_detail(id)).await {
        Ok(chair) => (StatusCode::OK, Json(chair)).into_response(),
        Err(err) => isuumo_error_response(err, "chair.detail"),
    }
}

pub async fn post_chairs(State(state): State<WebState>, multipart: Multipart) -> Response {
    let csv = match read_csv_field(multipart, "chairs").await {
        Ok(csv) => csv,
        Err(err) => return isuumo_error_response(err, "chair.ingest"),
    };
    match run_blocking(&state, move |app| app.ingest_chairs_csv(&csv)).await {
        Ok(_) => StatusCode::CREATED.into_response(),
        Err(err) => isuumo_error_response(err, "chair.ingest"),
    }
}

pub async fn search_chairs(
    State(state): State<WebState>,
    params: Result<Query<ChairSearchParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            return isuumo_error_response(
                IsuumoError::BadRequest(rejection.body_text()),
                "chair.search",
            );
        }
    };
    match run_blocking(&state, move |app| app.search_chairs(&params)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => isuumo_error_response(err, "chair.search"),
    }
}

pub async fn low_priced_chairs(State(state): State<WebState>) -> Response {
    match run_blocking(&state, Isuumo::low_priced_chairs).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => isuumo_error_response(err, "chair.low_priced"),
    }
}

pub async fn chair_search_condition(State(state): State<WebState>) -> Response {
    (StatusCode::OK, Json(state.app.chair_search_condition())).into_response()
}

pub async fn buy_chair(
    State(state): State<WebState>,
    Path(id): Path<String>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let (id, email) = match parse_id(&id).and_then(|id| Ok((id, contact_email(body)?))) {
        Ok(parsed) => parsed,
        Err(err) => return isuumo_error_response(err, "chair.buy"),
    };
    match run_blocking(&state, move |app| app.buy_chair(id, &email)).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => isuumo_error_response(err, "chair.buy"),
    }
}

pub async fn estate_detail(State(state): State<WebState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return isuumo_error_response(err, "estate.detail"),
    };
    match run_blocking(&state, move |app| app.estate_detail(id)).await {
        Ok(estate) => (StatusCode::OK, Json(estate)).into_response(),
        Err(err) => isuumo_error_response(err, "estate.detail"),
    }
}

pub async fn post_estates(State(state): State<WebState>, multipart: Multipart) -> Response {
    let csv = match read_csv_field(multipart, "estates").await {
        Ok(csv) => csv,
        Err(err) => return isuumo_error_response(err, "estate.ingest"),
    };
    match run_blocking(&state, move |app| app.ingest_estates_csv(&csv)).await {
        Ok(_) => StatusCode::CREATED.into_response(),
        Err(err) => isuumo_error_response(err, "estate.ingest"),
    }
}

pub async fn search_estates(
    State(state): State<WebState>,
    params: Result<Query<EstateSearchParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            return isuumo_error_response(
                IsuumoError::BadRequest(rejection.body_text()),
                "estate.search",
            );
        }
    };
    match run_blocking(&state, move |app| app.search_estates(&params)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => isuumo_error_response(err, "estate.search"),
    }
}

pub async fn low_priced_estates(State(state): State<WebState>) -> Response {
    match run_blocking(&state, Isuumo::low_priced_estates).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => isuumo_error_response(err, "estate.low_priced"),
    }
}

pub async fn estate_search_condition(State(state): State<WebState>) -> Response {
    (StatusCode::OK, Json(state.app.estate_search_condition())).into_response()
}

pub async fn request_estate_document(
    State(state): State<WebState>,
    Path(id): Path<String>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let (id, email) = match parse_id(&id).and_then(|id| Ok((id, contact_email(body)?))) {
        Ok(parsed) => parsed,
        Err(err) => return isuumo_error_response(err, "estate.request_document"),
    };
    match run_blocking(&state, move |app| app.request_estate_document(id, &email)).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => isuumo_error_response(err, "estate.request_document"),
    }
}

pub async fn nazotte_search(
    State(state): State<WebState>,
    body: Result<Json<Coordinates>, JsonRejection>,
) -> Response {
    let Json(polygon) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return isuumo_error_response(
                IsuumoError::BadRequest(rejection.body_text()),
                "estate.nazotte",
            );
        }
    };
    match run_blocking(&state, move |app| {
        app.search_estates_in_polygon(&polygon.coordinates)
    })
    .await
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => isuumo_error_response(err, "estate.nazotte"),
    }
}

pub async fn recommended_estates(
    State(state): State<WebState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(err) => return recommendation_error_response(err, "estate.recommend"),
    };
    match run_blocking(&state, move |app| app.recommended_estates(id)).await {
        Ok(estates) => (
            StatusCode::OK,
            Json(RecommendedEstatesResponse {
                estates: estates.as_slice(),
            }),
        )
            .into_response(),
        Err(err) => recommendation_error_response(err, "estate.recommend"),
    }
}

/// Core calls may sleep or wait on the store lock, so they run off the async
/// workers.
async fn run_blocking<T, F>(state: &WebState, f: F) -> Result<T, IsuumoError>
where
    T: Send + 'static,
    F: FnOnce(&Isuumo) -> isuumo_core::Result<T> + Send + 'static,
{
    let app = state.app.clone();
    tokio::task::spawn_blocking(move || f(&app))
        .await
        .map_err(|err| IsuumoError::Internal(format!("blocking task failed: {err}")))?
}

fn parse_id(raw: &str) -> Result<i64, IsuumoError> {
    raw.parse::<i64>()
        .map_err(|_| IsuumoError::BadRequest(format!("invalid id: {raw:?}")))
}

fn contact_email(body: Result<Json<ContactRequest>, JsonRejection>) -> Result<String, IsuumoError> {
    body.map(|Json(request)| request.email)
        .map_err(|rejection| IsuumoError::BadRequest(rejection.body_text()))
}

async fn read_csv_field(mut multipart: Multipart, field_name: &str) -> Result<Vec<u8>, IsuumoError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| IsuumoError::BadRequest(err.body_text()))?
    {
        if field.name() == Some(field_name) {
            let bytes = field
                .bytes()
                .await
                .map_err(|err| IsuumoError::BadRequest(err.body_text()))?;
            return Ok(bytes.to_vec());
        }
    }
    Err(IsuumoError::BadRequest(format!(
        "multipart field {field_name:?} is required"
    )))
}
