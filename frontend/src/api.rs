use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{ModelKind, PredictResponse, resolve_result_url};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{Detection, Model, Msg};

/// Fixed origin of the prediction service.
pub const SERVICE_ORIGIN: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build the upload request: {0}")]
    Request(gloo_net::Error),
    #[error("network error: {0}")]
    Network(gloo_net::Error),
    #[error("the detection service responded with status {0}")]
    Status(u16),
    #[error("failed to parse the detection response: {0}")]
    Decode(gloo_net::Error),
    #[error("no detection result was returned for this image")]
    EmptyResult,
}

async fn predict(model: ModelKind, file: GlooFile) -> Result<Detection, ApiError> {
    let form_data = web_sys::FormData::new().expect("failed to create form data");
    form_data
        .append_with_blob("file", file.as_ref())
        .expect("failed to append image to form data");

    let url = format!("{}/predict/{}", SERVICE_ORIGIN, model);
    let response = Request::post(&url)
        .body(form_data)
        .map_err(ApiError::Request)?
        .send()
        .await
        .map_err(ApiError::Network)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body: PredictResponse = response.json().await.map_err(ApiError::Decode)?;
    match body.result_image {
        Some(path) if !path.is_empty() => Ok(Detection {
            annotated_url: resolve_result_url(SERVICE_ORIGIN, &path),
            summary: body.summary,
        }),
        _ => Err(ApiError::EmptyResult),
    }
}

/// Runs one prediction round trip. Every path ends in exactly one `Finished`
/// message, which is what clears the loading flag.
pub fn spawn_predict(ctx: &Context<Model>, model: ModelKind, file: GlooFile) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = predict(model, file).await;
        if let Err(err) = &outcome {
            error!(format!("Prediction request failed: {:?}", err));
        }
        link.send_message(Msg::Finished(outcome));
    });
}
