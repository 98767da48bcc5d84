mod window;
mod home_page;
mod category_bar;
mod listing_carousel;
mod group_carousel;
mod listing_card;
mod group_card;
mod detail_page;
mod parallax_header;

pub use window::Window;
pub use home_page::HomePage;
pub use category_bar::CategoryBar;
pub use listing_carousel::ListingCarousel;
pub use group_carousel::GroupCarousel;
pub use listing_card::ListingCard;
pub use group_card::GroupCard;
pub use detail_page::DetailPage;
pub use parallax_header::ParallaxHeader;

use crate::constants;

/// Points a picture at a bundled or local image. Remote artwork is recorded
/// in the catalog but never fetched; the card keeps its placeholder
/// background in that case.
pub(crate) fn load_picture_from_uri(picture: &gtk::Picture, uri: &str) {
    if let Some(path) = uri.strip_prefix("resource://") {
        picture.set_resource(Some(path));
    } else if let Some(path) = uri.strip_prefix("file://") {
        picture.set_filename(Some(path));
    } else if uri.starts_with("http://") || uri.starts_with("https://") {
        glib::g_warning!(constants::APP_NAME, "not fetching remote image: {uri}");
        picture.set_paintable(None::<&gtk::gdk::Paintable>);
    } else if uri.is_empty() {
        picture.set_paintable(None::<&gtk::gdk::Paintable>);
    } else {
        picture.set_filename(Some(uri));
    }
}
