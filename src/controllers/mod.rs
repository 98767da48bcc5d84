mod parallax_scroll;
mod category_filter;
mod listing_activation;

pub use parallax_scroll::ParallaxScroll;
pub use category_filter::CategoryFilter;
pub use listing_activation::ListingActivation;
