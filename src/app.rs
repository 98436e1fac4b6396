use dioxus::prelude::*;
use prism_ui::theme::STYLESHEET;

use crate::pages::{BadgePage, BannerPage, CardPage, Overview, TestimonialPage};
use crate::theme::GALLERY_STYLES;

/// Gallery routes, one page per component.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Overview {},
    #[route("/badge")]
    BadgePage {},
    #[route("/banner")]
    BannerPage {},
    #[route("/card")]
    CardPage {},
    #[route("/testimonial")]
    TestimonialPage {},
}

/// Root application component.
///
/// Injects the component stylesheet plus gallery chrome, then routes.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {STYLESHEET} }
        style { {GALLERY_STYLES} }
        Router::<Route> {}
    }
}

/// Top navigation across the component pages
#[component]
pub fn GalleryNav() -> Element {
    rsx! {
        nav { class: "gallery-nav",
            span { class: "gallery-nav-title", "Prism UI" }
            Link { class: "gallery-nav-link", to: Route::Overview {}, "Overview" }
            Link { class: "gallery-nav-link", to: Route::BadgePage {}, "Badge" }
            Link { class: "gallery-nav-link", to: Route::BannerPage {}, "Banner" }
            Link { class: "gallery-nav-link", to: Route::CardPage {}, "Card" }
            Link { class: "gallery-nav-link", to: Route::TestimonialPage {}, "Testimonial" }
        }
    }
}
