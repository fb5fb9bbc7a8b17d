//! Farm location picker on a Leaflet map.
//!
//! Leaflet runs in the page; Rust talks to it through `document::eval`. The
//! long-lived mount script owns the map and streams `MapEvent`s back, while
//! short command scripts (`marker_script`, `recenter_script`) look the map up
//! in a page-global registry keyed by element id. Commands issued before the
//! map exists are queued and replayed once it mounts. Each mount tags its
//! registry entry with an instance number; unmounting removes only its own.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::core::geo::{Coordinate, DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::core::platform;
use crate::core::timing::{use_timer_slot, TimerSlot};
use crate::t;

use super::geolocation::{current_position, GeolocationError};

pub const MAP_ELEMENT_ID: &str = "farm-map";

/// Layout settle time before the map size is recomputed.
pub const RELAYOUT_DELAY_MS: u64 = 500;

const FLY_DURATION_SECS: f64 = 1.5;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

const MOUNT_TEMPLATE: &str = r#"
const id = "__ID__";
while (!window.L || !document.getElementById(id)) {
    await new Promise((r) => setTimeout(r, 50));
}
window.__agrigraudMaps = window.__agrigraudMaps || {};
const previous = window.__agrigraudMaps[id];
if (previous) {
    previous.map.remove();
}
const map = L.map(id).setView([__LAT__, __LNG__], __ZOOM__);
L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
    attribution: "&copy; OpenStreetMap contributors",
}).addTo(map);
const entry = { map, marker: null, instance: __INSTANCE__ };
entry.place = (lat, lng) => {
    if (entry.marker) {
        entry.marker.setLatLng([lat, lng]);
        return;
    }
    entry.marker = L.marker([lat, lng], { draggable: true }).addTo(map);
    entry.marker.on("dragend", () => {
        const p = entry.marker.getLatLng();
        dioxus.send({ kind: "drag", lat: p.lat, lng: p.lng });
    });
};
window.__agrigraudMaps[id] = entry;
map.on("click", (e) => {
    entry.place(e.latlng.lat, e.latlng.lng);
    dioxus.send({ kind: "click", lat: e.latlng.lat, lng: e.latlng.lng });
});
const pending = window.__agrigraudPending || {};
const queued = pending[id] || [];
delete pending[id];
queued.forEach((run) => run(entry));
await new Promise(() => {});
"#;

const UNMOUNT_TEMPLATE: &str = r#"
const id = "__ID__";
const maps = window.__agrigraudMaps || {};
const entry = maps[id];
if (entry && entry.instance === __INSTANCE__) {
    entry.map.remove();
    delete maps[id];
}
"#;

const COMMAND_TEMPLATE: &str = r#"
const id = "__ID__";
const run = (entry) => { __BODY__ };
const entry = (window.__agrigraudMaps || {})[id];
if (entry) {
    run(entry);
} else {
    window.__agrigraudPending = window.__agrigraudPending || {};
    (window.__agrigraudPending[id] = window.__agrigraudPending[id] || []).push(run);
}
"#;

/// Events the mount script streams back.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapEvent {
    Click { lat: f64, lng: f64 },
    Drag { lat: f64, lng: f64 },
}

impl MapEvent {
    pub fn coordinate(self) -> Coordinate {
        match self {
            MapEvent::Click { lat, lng } | MapEvent::Drag { lat, lng } => {
                Coordinate::new(lat, lng)
            }
        }
    }
}

pub fn mount_script(element_id: &str, instance: u64, center: Coordinate, zoom: u8) -> String {
    MOUNT_TEMPLATE
        .replace("__ID__", element_id)
        .replace("__INSTANCE__", &instance.to_string())
        .replace("__LAT__", &center.lat.to_string())
        .replace("__LNG__", &center.lng.to_string())
        .replace("__ZOOM__", &zoom.to_string())
}

/// Drop the registry entry, but only if `instance` still owns it.
pub fn unmount_script(element_id: &str, instance: u64) -> String {
    UNMOUNT_TEMPLATE
        .replace("__ID__", element_id)
        .replace("__INSTANCE__", &instance.to_string())
}

/// Place (or move) the single marker.
pub fn marker_script(element_id: &str, at: Coordinate) -> String {
    command_script(
        element_id,
        &format!("entry.place({}, {});", at.lat, at.lng),
    )
}

/// Recompute the container size, then pan smoothly to `center`.
pub fn recenter_script(element_id: &str, center: Coordinate, zoom: u8) -> String {
    command_script(
        element_id,
        &format!(
            "entry.map.invalidateSize(); entry.map.flyTo([{}, {}], {}, {{ duration: {} }});",
            center.lat, center.lng, zoom, FLY_DURATION_SECS
        ),
    )
}

fn command_script(element_id: &str, body: &str) -> String {
    COMMAND_TEMPLATE
        .replace("__ID__", element_id)
        .replace("__BODY__", body)
}

async fn locate_farm(
    mut location: Signal<Option<Coordinate>>,
    mut center: Signal<Coordinate>,
    mut locating: Signal<bool>,
) {
    locating.set(true);
    match current_position().await {
        Ok(here) => {
            info!(lat = here.lat, lng = here.lng, "farm located");
            location.set(Some(here));
            center.set(here);
        }
        Err(GeolocationError::Unavailable) => {
            debug!("geolocation unavailable, waiting for a manual pick");
        }
        Err(GeolocationError::Denied(message)) => {
            warn!(%message, "geolocation denied");
            platform::alert(&t!("alert-location-denied", message = message));
        }
    }
    locating.set(false);
}

fn run_script(script: &str) {
    let _ = document::eval(script);
}

#[component]
pub fn LocationPicker(location: Signal<Option<Coordinate>>) -> Element {
    crate::i18n::use_language();
    let mut location = location;
    let center = use_signal(|| DEFAULT_CENTER);
    let locating = use_signal(|| false);
    let mut relayout: TimerSlot = use_timer_slot();
    let instance = use_hook(|| NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed));
    // Held so the drop hook can still reach the page after the scope is gone.
    let page = use_hook(document::document);

    use_drop(move || {
        debug!(instance, "unmounting farm map");
        let _ = page.eval(unmount_script(MAP_ELEMENT_ID, instance));
    });

    use_hook(move || {
        spawn(async move {
            let mut bridge = document::eval(&mount_script(
                MAP_ELEMENT_ID,
                instance,
                DEFAULT_CENTER,
                DEFAULT_ZOOM,
            ));
            loop {
                match bridge.recv::<MapEvent>().await {
                    Ok(event) => {
                        debug!(?event, "map event");
                        location.set(Some(event.coordinate()));
                    }
                    Err(err) => {
                        warn!("map bridge closed: {err:?}");
                        break;
                    }
                }
            }
        })
    });

    use_hook(move || spawn(locate_farm(location, center, locating)));

    use_effect(move || {
        if let Some(at) = location() {
            run_script(&marker_script(MAP_ELEMENT_ID, at));
        }
    });

    use_effect(move || {
        let target = center();
        relayout.schedule(RELAYOUT_DELAY_MS, move || {
            run_script(&recenter_script(MAP_ELEMENT_ID, target, DEFAULT_ZOOM));
        });
    });

    let busy = locating();

    rsx! {
        document::Link { rel: "stylesheet", href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }

        div { class: "location-picker",
            div { class: "location-picker__toolbar",
                span { class: "location-picker__label", {t!("map-title")} }
                button {
                    r#type: "button",
                    class: "button button--ghost location-picker__locate",
                    disabled: busy,
                    onclick: move |_| {
                        if !locating() {
                            spawn(locate_farm(location, center, locating));
                        }
                    },
                    if busy { {t!("map-locating")} } else { {t!("map-use-location")} }
                }
            }
            div { id: MAP_ELEMENT_ID, class: "location-picker__map" }
            p { class: "location-picker__status",
                if let Some(at) = location() {
                    {t!("map-selected", coords = at.label())}
                } else {
                    {t!("map-hint")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_script_fills_every_token() {
        let js = mount_script("farm-map", 7, DEFAULT_CENTER, 13);
        assert!(js.contains(r#"const id = "farm-map";"#));
        assert!(js.contains("instance: 7 }"));
        assert!(js.contains("setView([20.5937, 78.9629], 13)"));
        assert!(js.contains("{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"));
        for token in ["__ID__", "__INSTANCE__", "__LAT__", "__LNG__", "__ZOOM__"] {
            assert!(!js.contains(token), "{token} left in mount script");
        }
    }

    #[test]
    fn recenter_relayouts_before_flying() {
        let js = recenter_script("farm-map", Coordinate::new(17.385, 78.4867), 13);
        let relayout = js.find("invalidateSize()").unwrap();
        let fly = js.find("flyTo([17.385, 78.4867], 13, { duration: 1.5 })").unwrap();
        assert!(relayout < fly);
    }

    #[test]
    fn unmount_only_removes_its_own_entry() {
        let js = unmount_script("farm-map", 3);
        assert!(js.contains(r#"const id = "farm-map";"#));
        assert!(js.contains("entry.instance === 3"));
        let guard = js.find("entry.instance === 3").unwrap();
        let removal = js.find("delete maps[id]").unwrap();
        assert!(guard < removal);
        assert!(!js.contains("__INSTANCE__"));
    }

    #[test]
    fn marker_command_queues_until_map_exists() {
        let js = marker_script("farm-map", Coordinate::new(1.5, -2.25));
        assert!(js.contains("entry.place(1.5, -2.25);"));
        assert!(js.contains("__agrigraudPending"));
    }

    #[test]
    fn click_and_drag_events_decode() {
        let click: MapEvent =
            serde_json::from_str(r#"{"kind":"click","lat":10.0,"lng":20.0}"#).unwrap();
        let drag: MapEvent =
            serde_json::from_str(r#"{"kind":"drag","lat":11.0,"lng":21.0}"#).unwrap();
        assert_eq!(click.coordinate(), Coordinate::new(10.0, 20.0));
        assert_eq!(drag.coordinate(), Coordinate::new(11.0, 21.0));
    }
}
