use dioxus::logger::tracing::warn;
use js_sys::{Function, Promise};
use place_picker_shared::models::Coordinates;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Position as GeolocationPosition;

/// Ask the browser for the user's position.
///
/// Resolves to `None` when geolocation is unsupported, denied or fails; callers
/// fall back to the unsorted catalog.
pub async fn current_position() -> Option<Coordinates> {
    let geolocation = web_sys::window()?.navigator().geolocation().ok()?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let reject_now = reject.clone();
        let on_success = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let on_error = Closure::once_into_js(move |error: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &error);
        });
        if let Err(e) = geolocation.get_current_position_with_error_callback(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
        ) {
            let _ = reject_now.call1(&JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let coords = value.unchecked_into::<GeolocationPosition>().coords();
            Some(Coordinates {
                lat: coords.latitude(),
                lng: coords.longitude(),
            })
        }
        Err(e) => {
            warn!("Geolocation unavailable: {e:?}");
            None
        }
    }
}
