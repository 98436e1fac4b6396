//! Testimonial Component
//!
//! Quote block with author footer and a polymorphic company logo.

use dioxus::prelude::*;

/// Company logo source: either an image URL or a custom inline graphic.
///
/// Modeled as a tagged union so both render paths are exhaustive. A
/// `Custom` graphic should be decorative (aria-hidden); the component wraps
/// it in a labelled `role="img"` container.
#[derive(Clone, PartialEq)]
pub enum LogoSource {
    /// Image URL, rendered as an `img` element
    Url(String),
    /// Custom inline graphic (typically an SVG component)
    Custom(Element),
}

impl From<&str> for LogoSource {
    fn from(url: &str) -> Self {
        LogoSource::Url(url.to_string())
    }
}

impl From<String> for LogoSource {
    fn from(url: String) -> Self {
        LogoSource::Url(url)
    }
}

impl From<Element> for LogoSource {
    fn from(element: Element) -> Self {
        LogoSource::Custom(element)
    }
}

/// Properties for the Testimonial component
#[derive(Clone, PartialEq, Props)]
pub struct TestimonialProps {
    /// Company logo, an image URL or a custom graphic
    #[props(into)]
    pub logo: LogoSource,
    /// Quote text, without quotation marks; the component adds curly quotes
    #[props(into)]
    pub quote: String,
    /// Author name
    #[props(into)]
    pub author: String,
    /// Author role/title
    #[props(into)]
    pub role: String,
    /// Accessible name for the logo. Defaults to `"{author} company logo"`
    /// for image logos and `"Company logo"` for custom graphics.
    #[props(default)]
    pub logo_alt: Option<String>,
}

/// Customer testimonial with logo, quote, and author footer
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Testimonial {
///         logo: "https://example.com/acme.png",
///         quote: "Shipped in a week.",
///         author: "Ada Perez",
///         role: "CTO",
///     }
/// }
/// ```
#[component]
pub fn Testimonial(props: TestimonialProps) -> Element {
    let quote = &props.quote;
    let author = &props.author;
    let role = &props.role;

    let logo = match props.logo {
        LogoSource::Url(src) => {
            let alt = props
                .logo_alt
                .unwrap_or_else(|| format!("{author} company logo"));
            rsx! {
                img { class: "testimonial-logo", src: "{src}", alt: "{alt}" }
            }
        }
        LogoSource::Custom(graphic) => {
            let label = props.logo_alt.unwrap_or_else(|| "Company logo".to_string());
            rsx! {
                div {
                    class: "testimonial-logo",
                    role: "img",
                    "aria-label": "{label}",
                    {graphic}
                }
            }
        }
    };

    rsx! {
        article {
            class: "testimonial-container",
            "aria-labelledby": "testimonial-author",
            div { class: "testimonial-header", {logo} }
            blockquote { class: "testimonial-quote", "\u{201c}{quote}\u{201d}" }
            div { class: "testimonial-author",
                p {
                    id: "testimonial-author",
                    class: "testimonial-author-name",
                    "{author}"
                }
                p { class: "testimonial-author-role", "{role}" }
            }
        }
    }
}
