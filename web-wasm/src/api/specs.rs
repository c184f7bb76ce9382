//! 재원 데이터 로더
//!
//! 호스트 페이지가 `window.SPEC_DATA` 전역으로 데이터를 내장해 두었으면
//! 동기적으로 그것을 쓰고(네트워크 생략), 없으면 specs.json 을 한 번만
//! fetch 한다. 실패 시 재시도하지 않는다 — 호출 측이 안내문을 렌더한다.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use seongil_spec_common::{Catalog, Error, SpecData};

const SPECS_URL: &str = "assets/data/specs.json";

fn js_error(value: JsValue) -> Error {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    Error::CatalogUnavailable(detail)
}

/// `window.SPEC_DATA` 전역이 유효한 재원 문서면 카탈로그로 변환
fn embedded_catalog() -> Option<Catalog> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("SPEC_DATA")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let data: SpecData = serde_wasm_bindgen::from_value(value).ok()?;
    Some(Catalog::new(data))
}

/// 카탈로그 로드 (페이지당 1회)
pub async fn load_catalog() -> Result<Catalog, Error> {
    if let Some(catalog) = embedded_catalog() {
        web_sys::console::log_1(&"SPEC_DATA 전역 사용 (fetch 생략)".into());
        return Ok(catalog);
    }
    fetch_catalog().await
}

async fn fetch_catalog() -> Result<Catalog, Error> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request =
        Request::new_with_str_and_init(SPECS_URL, &opts).map_err(js_error)?;

    let window = web_sys::window()
        .ok_or_else(|| Error::CatalogUnavailable("window 없음".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::CatalogUnavailable(format!("HTTP {}", resp.status())));
    }

    let text_value = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text_value
        .as_string()
        .ok_or_else(|| Error::CatalogUnavailable("본문이 문자열이 아님".to_string()))?;

    // JSON 이 아닌 본문도 여기서 CatalogUnavailable 로 귀결된다
    Catalog::from_json(&body)
}
