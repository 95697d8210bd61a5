//! REST Command Wrappers
//!
//! Frontend bindings to the marketplace API, organized by domain.

mod category;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub use category::*;

/// Send a request and fail on non-2xx status
async fn send(method: &str, url: &str) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or("No window")?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(format!("{} {} failed: HTTP {}", method, url, response.status()));
    }
    Ok(response)
}

/// Send a request and return the parsed JSON body
async fn fetch_json(method: &str, url: &str) -> Result<JsValue, String> {
    let response = send(method, url).await?;
    JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
