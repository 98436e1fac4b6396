//! Status and default icons
//!
//! Inline SVG icon components. The four banner icons carry their own
//! accessible name (the capitalized status), since the banner itself is
//! labelled by its title. [`IconUpload`] is decorative: the card wraps it
//! in a labelled `role="img"` container.

use dioxus::prelude::*;

/// Checkmark-in-circle icon for success banners
#[component]
pub fn IconSuccess() -> Element {
    rsx! {
        svg {
            class: "banner-icon",
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            role: "img",
            "aria-label": "Success",
            path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
            polyline { points: "22 4 12 14.01 9 11.27" }
        }
    }
}

/// Circled "i" icon for info banners
#[component]
pub fn IconInfo() -> Element {
    rsx! {
        svg {
            class: "banner-icon",
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            role: "img",
            "aria-label": "Info",
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", y1: "16", x2: "12", y2: "12" }
            line { x1: "12", y1: "8", x2: "12.01", y2: "8" }
        }
    }
}

/// Triangle-with-exclamation icon for warning banners
#[component]
pub fn IconWarning() -> Element {
    rsx! {
        svg {
            class: "banner-icon",
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            role: "img",
            "aria-label": "Warning",
            path {
                d: "M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z",
            }
            line { x1: "12", y1: "9", x2: "12", y2: "13" }
            line { x1: "12", y1: "17", x2: "12.01", y2: "17" }
        }
    }
}

/// Crossed-out circle icon for error banners
#[component]
pub fn IconError() -> Element {
    rsx! {
        svg {
            class: "banner-icon",
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            role: "img",
            "aria-label": "Error",
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "15", y1: "9", x2: "9", y2: "15" }
            line { x1: "9", y1: "9", x2: "15", y2: "15" }
        }
    }
}

/// Upload glyph, the built-in default icon for [`crate::components::Card`]
#[component]
pub fn IconUpload() -> Element {
    rsx! {
        svg {
            class: "icon-upload",
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "17 8 12 3 7 8" }
            line { x1: "12", y1: "3", x2: "12", y2: "15" }
        }
    }
}
