//! Presentational widgets driven by the storefront.

mod carousel;
mod modal;
mod nav;

pub use carousel::TestimonialCarousel;
pub use modal::{CartModal, ModalState};
pub use nav::MobileNav;
