//! Floating icon layer - per-frame direct style mutation
//!
//! The drifting icons bypass the re-render path: one spawned loop steps the
//! whole field every frame and writes `left`/`top` straight onto the icon
//! elements. The task is owned by the component scope, so unmounting the
//! view cancels it; if the elements are already gone mid-frame the loop
//! stops on its own.

use dioxus::prelude::*;

use crate::anim::{Bounds, IconField, fresh_rng};
use crate::content::FLOATING_ICONS;

const FRAME_MS: u32 = 16;

/// Live viewport bounds, with a fallback when no window exists
pub fn viewport_bounds() -> Bounds {
    let mut width = 1024.0;
    let mut height = 768.0;
    if let Some(window) = web_sys::window() {
        if let Some(w) = window.inner_width().ok().and_then(|v| v.as_f64()) {
            width = w as f32;
        }
        if let Some(h) = window.inner_height().ok().and_then(|v| v.as_f64()) {
            height = h as f32;
        }
    }
    Bounds::new(width, height)
}

fn icon_dom_id(i: usize) -> String {
    format!("floating-icon-{i}")
}

/// Write an icon's position onto its element; false if the element is gone
fn place_icon(document: &web_sys::Document, i: usize, x: f32, y: f32) -> bool {
    let Some(element) = document.get_element_by_id(&icon_dom_id(i)) else {
        return false;
    };
    element
        .set_attribute("style", &format!("left: {x}px; top: {y}px;"))
        .is_ok()
}

#[component]
pub fn FloatingIcons() -> Element {
    use_effect(move || {
        spawn(async move {
            let mut field =
                IconField::scatter(&mut fresh_rng(), FLOATING_ICONS.len(), viewport_bounds());
            loop {
                gloo_timers::future::TimeoutFuture::new(FRAME_MS).await;
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    break;
                };
                // Re-read bounds each frame so window resizes are honored
                field.step(viewport_bounds());
                let mut alive = false;
                for (i, icon) in field.iter().enumerate() {
                    alive |= place_icon(&document, i, icon.x, icon.y);
                }
                if !alive {
                    web_sys::console::warn_1(&"floating icons removed, stopping loop".into());
                    break;
                }
            }
        });
    });

    rsx! {
        div {
            id: "floating-icons-container",
            for (idx, name) in FLOATING_ICONS.iter().enumerate() {
                i {
                    key: "{idx}",
                    id: "floating-icon-{idx}",
                    class: "uil {name} floating-icon",
                }
            }
        }
    }
}
