use futures::future::{FutureExt, LocalBoxFuture};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use shared::types::{AuthRequest, AuthResponse, SessionUser};

use crate::config::Config;
use crate::login::{AuthClient, AuthError};
use crate::types::Credentials;

fn js_error(err: JsValue) -> AuthError {
    AuthError::Request(format!("{err:?}"))
}

/// Sends `data` as a JSON body and returns the status and raw body of the response.
async fn post_json<T: Serialize>(url: &str, data: &T) -> Result<(u16, String), AuthError> {
    let data = serde_wasm_bindgen::to_value(data).map_err(|err| AuthError::Request(err.to_string()))?;
    let body = js_sys::JSON::stringify(&data).map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&body.into());

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request.headers().set("Content-Type", "application/json").map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| AuthError::Request("window is not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(|err| AuthError::Payload(format!("{err:?}")))?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

fn read_auth_response(status: u16, body: &str) -> Result<SessionUser, AuthError> {
    if !(200..300).contains(&status) {
        return Err(AuthError::Status(status));
    }
    let response: AuthResponse = serde_json::from_str(body).map_err(|err| AuthError::Payload(err.to_string()))?;
    Ok(response.data)
}

/// Registers the user against the remote authentication endpoint.
pub struct FetchAuthClient {
    url: String,
    client_id: String,
}

impl FetchAuthClient {
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.auth_url.clone(),
            client_id: config.client_id.clone(),
        }
    }
}

impl AuthClient for FetchAuthClient {
    fn authenticate(&self, credentials: Credentials) -> LocalBoxFuture<'static, Result<SessionUser, AuthError>> {
        let url = self.url.clone();
        let request = AuthRequest {
            client_id: self.client_id.clone(),
            email: credentials.email,
            name: credentials.name,
        };
        async move {
            let (status, body) = post_json(&url, &request).await?;
            read_auth_response(status, &body)
        }
        .boxed_local()
    }
}
