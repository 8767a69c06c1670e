use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
export async function jsPostJson(url, body) {
  if (typeof fetch === 'undefined') {
    throw new Error('fetch is unavailable in this browser context');
  }
  const response = await fetch(url, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body,
  });
  if (!response.ok) {
    const detail = await response.text().catch(() => '');
    throw new Error(`relay responded ${response.status}${detail ? `: ${detail}` : ''}`);
  }
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsPostJson)]
    fn js_post_json(url: &str, body: &str) -> Promise;
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub async fn post_json(url: &str, body: &str) -> Result<(), String> {
    JsFuture::from(js_post_json(url, body))
        .await
        .map(|_| ())
        .map_err(js_error_to_string)
}
