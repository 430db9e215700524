use dioxus::prelude::*;
use place_picker_shared::models::Place;

use crate::api;

/// A titled grid of places. Clicking a place hands it to `on_select_place`.
#[component]
pub fn Places(
    title: String,
    places: Vec<Place>,
    is_loading: bool,
    loading_text: String,
    fallback_text: String,
    on_select_place: EventHandler<Place>,
) -> Element {
    rsx! {
        section { class: "places-category",
            h2 { "{title}" }
            if is_loading {
                p { class: "fallback-text", "{loading_text}" }
            } else if places.is_empty() {
                p { class: "fallback-text", "{fallback_text}" }
            } else {
                ul { class: "places",
                    for place in places.iter() {
                        li { key: "{place.id}", class: "place-item",
                            button {
                                onclick: {
                                    let place = place.clone();
                                    move |_| on_select_place.call(place.clone())
                                },
                                img {
                                    src: api::image_url(&place.image.src),
                                    alt: "{place.image.alt}",
                                }
                                h3 { "{place.title}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
