//! Prism UI Components
//!
//! Stateless, presentational Dioxus components styled through a shared set
//! of design tokens:
//!
//! - **Badge**: inline label in eight colors and two shapes
//! - **Banner**: status/alert block with live-region semantics
//! - **Card**: icon + title + content block with an injectable icon
//! - **Testimonial**: quote block with a polymorphic company logo
//!
//! Components never hold state and never talk to each other; each render is
//! a deterministic mapping from props to markup. Variant attributes (class
//! tokens, icons, ARIA roles) are resolved through closed enums, so an
//! out-of-range variant is unrepresentable rather than a runtime error.
//!
//! Host applications include [`theme::STYLESHEET`] once (a `style` element
//! at the app root) to get the token definitions and component CSS.

#![allow(non_snake_case)]

pub mod components;
pub mod theme;

pub use components::*;
