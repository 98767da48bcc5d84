use crate::prelude::*;
use crate::actions::ChromeActions;
use crate::constants;
use crate::repository::Repository;
use crate::widgets::{DetailPage, ListingCarousel};
use std::rc::{Rc, Weak};

struct State {
    repository: Repository<'static>,
    navigation_view: adw::NavigationView,
    listing_carousel: ListingCarousel,
    actions: Rc<dyn ChromeActions>,
}

struct WeakListingActivation {
    state: Weak<State>,
}

impl WeakListingActivation {
    fn upgrade(&self) -> Option<ListingActivation> {
        self.state.upgrade().map(|state| ListingActivation { state })
    }
}

/// Pushes a detail page when a destination card is activated. The lookup
/// result stays optional all the way into the page, so a stale id degrades
/// to a fallback screen instead of a crash.
pub struct ListingActivation {
    state: Rc<State>,
}

impl ListingActivation {

    pub fn new(
        repository: Repository<'static>,
        navigation_view: adw::NavigationView,
        listing_carousel: ListingCarousel,
        actions: Rc<dyn ChromeActions>,
    ) -> Self {
        let state = Rc::new(State {
            repository,
            navigation_view,
            listing_carousel,
            actions,
        });

        let this = Self { state };
        this.setup_activation_handler();
        this
    }

    fn setup_activation_handler(&self) {
        let this_weak = self.downgrade();
        self.state.listing_carousel.set_on_activated(move |id| {
            if let Some(this) = this_weak.upgrade() {
                this.open_listing(id);
            }
        });
    }

    fn open_listing(&self, id: &str) {
        let listing = self.state.repository.destination_by_id(id);
        if listing.is_none() {
            glib::g_warning!(constants::APP_NAME, "no listing with id {id}");
        }

        let page = DetailPage::new(listing, &self.state.actions);
        self.state.navigation_view.push(&page);
    }

    fn downgrade(&self) -> WeakListingActivation {
        let state = Rc::downgrade(&self.state);
        WeakListingActivation { state }
    }

}
