//! HTTP calls to the upload and question endpoints.
//!
//! The status code is not inspected: the JSON body alone decides between
//! success and an application error.

use docqa_shared::api::question_form_body;
use docqa_shared::protocol::{FILE_FIELD, FORM_URLENCODED};
use docqa_shared::{ApiError, AskResponse, UploadResponse};
use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::utils;

fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    log::debug!("{} -> {}", response.url(), response.status());
    response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// POST the file as multipart form data under the `file` field
pub async fn upload_file(file: &File) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(js_error)?;

    let url = utils::client_config().upload_url();
    let response = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    UploadResponse::parse(&read_body(response).await?)
}

/// POST the question as `application/x-www-form-urlencoded`
pub async fn ask_question(question: &str) -> Result<AskResponse, ApiError> {
    let url = utils::client_config().ask_url();
    let response = Request::post(&url)
        .header("Content-Type", FORM_URLENCODED)
        .body(question_form_body(question))
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    AskResponse::parse(&read_body(response).await?)
}
