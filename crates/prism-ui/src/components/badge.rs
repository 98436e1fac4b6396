//! Badge Component
//!
//! Small inline label in one of eight colors and two shapes.

use dioxus::prelude::*;

use super::variant::{BadgeColor, BadgeFormat};

/// Properties for the Badge component
#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    /// Badge text, preserved verbatim in the accessible label
    #[props(into)]
    pub content: String,
    /// Shape variant (default: square)
    #[props(default)]
    pub format: BadgeFormat,
    /// Color variant (default: gray)
    #[props(default)]
    pub color: BadgeColor,
}

/// Inline status badge
///
/// Emits exactly three class tokens (`badge`, the color, the format) and an
/// accessible label of the form `"{color} badge: {content}"`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Badge { content: "New" }
///     Badge { content: "3", color: BadgeColor::Red, format: BadgeFormat::Pill }
/// }
/// ```
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let color = props.color.class();
    let format = props.format.class();
    let content = &props.content;

    rsx! {
        span {
            class: "badge {color} {format}",
            role: "status",
            "aria-label": "{color} badge: {content}",
            "{content}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_props_resolve_to_gray_square() {
        let props = BadgeProps::builder().content("x").build();
        assert_eq!(props.color, BadgeColor::Gray);
        assert_eq!(props.format, BadgeFormat::Square);
    }

    #[test]
    fn content_accepts_str_and_string() {
        let a = BadgeProps::builder().content("7").build();
        let b = BadgeProps::builder().content(7.to_string()).build();
        assert_eq!(a.content, b.content);
    }
}
