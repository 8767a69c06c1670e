fn unsupported() -> String {
    "Browser network APIs are only available when compiled for wasm32".to_string()
}

pub async fn post_json(_url: &str, _body: &str) -> Result<(), String> {
    Err(unsupported())
}
