use dioxus::prelude::*;
use place_picker_shared::cancel::CancelToken;
use place_picker_shared::catalog::CatalogView;
use place_picker_shared::models::Place;
use place_picker_shared::selection::{PendingWrite, SelectionController};
use place_picker_shared::PlacesApi;

use crate::api::{self, HttpPlacesApi};
use crate::components::delete_confirmation::DeleteConfirmation;
use crate::components::error_panel::ErrorPanel;
use crate::components::modal::Modal;
use crate::components::places::Places;
use crate::geolocation;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Send a locally applied change and reconcile the controller with the outcome.
fn sync(api: HttpPlacesApi, mut selection: Signal<SelectionController>, pending: PendingWrite) {
    spawn(async move {
        let result = api.update_user_places(pending.places()).await.map(|_| ());
        selection.write().finish_write(pending, result);
    });
}

#[component]
pub fn PlacePicker() -> Element {
    let api = use_hook(|| HttpPlacesApi::new(api::api_base_url()));

    // Shared by both views and flipped on teardown
    let cancel = use_hook(CancelToken::new);
    let mut selection = use_signal({
        let cancel = cancel.clone();
        move || SelectionController::new(cancel)
    });
    let mut catalog = use_signal({
        let cancel = cancel.clone();
        move || CatalogView::new(cancel)
    });
    use_drop({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let _user_places_loader = use_future({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let ticket = selection.write().begin_load();
                let result = api.fetch_user_places().await;
                selection.write().finish_load(ticket, result);
            }
        }
    });

    // The catalog and the position arrive independently; the view combines them
    let _catalog_loader = use_future({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                let result = api.fetch_available_places().await;
                catalog.write().set_catalog(result);
            }
        }
    });
    let _position_loader = use_future(move || async move {
        let origin = geolocation::current_position().await;
        catalog.write().set_origin(origin);
    });

    let on_select_place = {
        let api = api.clone();
        move |place: Place| {
            let pending = selection.write().select(place);
            if let Some(pending) = pending {
                sync(api.clone(), selection, pending);
            }
        }
    };

    let on_remove_place = {
        let api = api.clone();
        move |_: ()| {
            let pending = selection.write().confirm_remove();
            if let Some(pending) = pending {
                sync(api.clone(), selection, pending);
            }
        }
    };

    let (user_places, is_loading, load_error, update_error, confirming) = {
        let state = selection.read();
        (
            state.places().to_vec(),
            state.is_loading(),
            state.load_error().map(str::to_string),
            state.update_error().map(str::to_string),
            state.pending_deletion().is_some(),
        )
    };
    let (available_places, catalog_loading, catalog_error) = {
        let view = catalog.read();
        (
            view.places().to_vec(),
            view.is_loading(),
            view.error().map(str::to_string),
        )
    };

    rsx! {
        Modal {
            open: update_error.is_some(),
            on_close: move |_| selection.write().clear_update_error(),
            if let Some(message) = update_error.clone() {
                ErrorPanel {
                    title: "An error occurred!",
                    message,
                    on_confirm: move |_| selection.write().clear_update_error(),
                }
            }
        }

        Modal {
            open: confirming,
            on_close: move |_| selection.write().cancel_remove(),
            DeleteConfirmation {
                on_cancel: move |_| selection.write().cancel_remove(),
                on_confirm: on_remove_place,
            }
        }

        header {
            img { src: LOGO, alt: "Stylized globe" }
            h1 { "PlacePicker" }
            p {
                "Create your personal collection of places you would like to visit or you have visited."
            }
        }
        main {
            if let Some(message) = load_error {
                ErrorPanel { title: "An error occurred!", message }
            } else {
                Places {
                    title: "I'd like to visit ...",
                    places: user_places,
                    is_loading,
                    loading_text: "Fetching your places...",
                    fallback_text: "Select the places you would like to visit below.",
                    on_select_place: move |place: Place| selection.write().start_remove(place.id),
                }
            }

            if let Some(message) = catalog_error {
                ErrorPanel { title: "An error occurred!", message }
            } else {
                Places {
                    title: "Available Places",
                    places: available_places,
                    is_loading: catalog_loading,
                    loading_text: "Fetching place data...",
                    fallback_text: "No places available.",
                    on_select_place,
                }
            }
        }
    }
}
