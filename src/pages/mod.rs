//! Gallery pages, one per component.

mod badge;
mod banner;
mod card;
mod overview;
mod testimonial;

pub use badge::BadgePage;
pub use banner::BannerPage;
pub use card::CardPage;
pub use overview::Overview;
pub use testimonial::TestimonialPage;
