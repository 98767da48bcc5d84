use crate::models::Category;
use crate::repository::Repository;
use crate::widgets::{CategoryBar, ListingCarousel};
use std::rc::{Rc, Weak};

struct State {
    repository: Repository<'static>,
    category_bar: CategoryBar,
    listing_carousel: ListingCarousel,
}

struct WeakCategoryFilter {
    state: Weak<State>,
}

impl WeakCategoryFilter {
    fn upgrade(&self) -> Option<CategoryFilter> {
        self.state.upgrade().map(|state| CategoryFilter { state })
    }
}

/// Rebinds the destination carousel whenever the selected category chip
/// changes.
pub struct CategoryFilter {
    state: Rc<State>,
}

impl CategoryFilter {

    pub fn new(
        repository: Repository<'static>,
        category_bar: CategoryBar,
        listing_carousel: ListingCarousel,
    ) -> Self {
        let state = Rc::new(State {
            repository,
            category_bar,
            listing_carousel,
        });

        let this = Self { state };
        this.setup_selection_handler();
        this
    }

    /// Binds the unfiltered collection, matching the initially active "All"
    /// chip.
    pub fn apply_initial(&self) {
        let destinations: Vec<_> = self.state.repository.destinations().iter().collect();
        self.state.listing_carousel.bind(&destinations);
    }

    fn setup_selection_handler(&self) {
        let this_weak = self.downgrade();
        self.state.category_bar.set_on_selected(move |category| {
            if let Some(this) = this_weak.upgrade() {
                this.apply_category(category);
            }
        });
    }

    fn apply_category(&self, category: &'static Category) {
        let destinations = self.state.repository.destinations_in(category);
        self.state.listing_carousel.bind(&destinations);
    }

    fn downgrade(&self) -> WeakCategoryFilter {
        let state = Rc::downgrade(&self.state);
        WeakCategoryFilter { state }
    }

}
