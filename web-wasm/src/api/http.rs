//! fetch の薄いラッパ

use serde::de::DeserializeOwned;
use trust_wedo_common::{api::api_error, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn transport(e: JsValue) -> Error {
    Error::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// リクエストを送る。通信に失敗したら `Error::Transport`
pub(crate) async fn send(
    method: &str,
    url: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> Result<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(transport)?;
    }
    for (name, value) in headers {
        request.headers().set(name, value).map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    resp_value.dyn_into::<Response>().map_err(transport)
}

/// 本文をテキストで読む
pub(crate) async fn read_text(resp: &Response) -> Result<String> {
    let promise = resp.text().map_err(transport)?;
    let value = JsFuture::from(promise).await.map_err(transport)?;
    Ok(value.as_string().unwrap_or_default())
}

/// 2xxなら本文をJSONとして読み、それ以外は `Error::Api` にする
pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.ok() {
        let body = read_text(&resp).await.unwrap_or_default();
        return Err(api_error(resp.status(), &body, ""));
    }

    let promise = resp.json().map_err(transport)?;
    let json = JsFuture::from(promise).await.map_err(transport)?;
    serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Json(<serde_json::Error as serde::de::Error>::custom(e.to_string())))
}

/// 本文を読まずに成否だけ確認する
pub(crate) async fn expect_ok(resp: Response) -> Result<()> {
    if resp.ok() {
        return Ok(());
    }
    let body = read_text(&resp).await.unwrap_or_default();
    Err(api_error(resp.status(), &body, ""))
}
