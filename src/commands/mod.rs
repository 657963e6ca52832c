//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod note;
mod folder;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{AppError, AppResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use note::*;
pub use folder::*;

/// Serialize command arguments; `None` goes out as `null`, not as a missing key
fn to_args<A: Serialize>(args: &A) -> AppResult<JsValue> {
    Ok(args.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Invoke a command and map a rejected promise to `AppError::Backend`
async fn call(cmd: &str, args: JsValue) -> AppResult<JsValue> {
    invoke(cmd, args).await.map_err(|e| {
        let message = e.as_string().unwrap_or_else(|| format!("{:?}", e));
        log::error!("[IPC] {} failed: {}", cmd, message);
        AppError::Backend(message)
    })
}

/// Invoke a command and decode its response
async fn call_decode<R: DeserializeOwned>(cmd: &str, args: JsValue) -> AppResult<R> {
    let result = call(cmd, args).await?;
    Ok(serde_wasm_bindgen::from_value(result)?)
}
