//! Static page content.

mod testimonials;

pub use testimonials::*;
