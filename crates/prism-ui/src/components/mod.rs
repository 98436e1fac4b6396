//! Presentational components
//!
//! Every component here is a pure render function: props in, markup out.
//! Variant-driven attributes (classes, icons, ARIA roles) come from the
//! static tables in [`variant`].

mod badge;
mod banner;
mod card;
mod icons;
mod testimonial;
pub mod variant;

pub use badge::{Badge, BadgeProps};
pub use banner::{Banner, BannerProps};
pub use card::{Card, CardProps};
pub use icons::{IconError, IconInfo, IconSuccess, IconUpload, IconWarning};
pub use testimonial::{LogoSource, Testimonial, TestimonialProps};
pub use variant::{
    BadgeColor, BadgeFormat, BannerPresentation, BannerStatus, BADGE_COLORS, BADGE_FORMATS,
    BANNER_STATUSES,
};
