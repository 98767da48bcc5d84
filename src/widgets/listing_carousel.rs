use crate::prelude::*;
use crate::actions::ChromeActions;
use crate::models::Listing;
use super::ListingCard;
use std::cell::RefCell;
use std::rc::Rc;

type ActivatedCallback = Box<dyn Fn(&str) + 'static>;

mod listing_carousel {
    use super::*;

    #[derive(Default)]
    pub struct ListingCarousel {
        pub scrolled_window: gtk::ScrolledWindow,
        pub container: gtk::Box,
        pub on_activated: RefCell<Option<ActivatedCallback>>,
        pub actions: RefCell<Option<Rc<dyn ChromeActions>>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ListingCarousel {
        const NAME: &'static str = "ListingCarousel";
        type Type = super::ListingCarousel;
        type ParentType = gtk::Widget;

        fn class_init(class: &mut Self::Class) {
            class.set_layout_manager_type::<gtk::BinLayout>();
        }
    }

    impl ObjectImpl for ListingCarousel {
        fn constructed(&self) {
            self.parent_constructed();

            self.container.set_spacing(16);
            self.scrolled_window.set_policy(gtk::PolicyType::External, gtk::PolicyType::Never);
            self.scrolled_window.set_propagate_natural_height(true);
            self.scrolled_window.set_child(Some(&self.container));
            self.scrolled_window.set_parent(&*self.obj());
        }

        fn dispose(&self) {
            self.scrolled_window.unparent();
        }
    }

    impl WidgetImpl for ListingCarousel {}
}

glib::wrapper! {
    pub struct ListingCarousel(ObjectSubclass<listing_carousel::ListingCarousel>)
        @extends gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl ListingCarousel {

    pub fn new() -> Self {
        glib::Object::builder().build()
    }

    /// Replaces the row with one card per listing, preserving input order.
    /// An empty slice leaves an empty, non-erroring row.
    pub fn bind(&self, listings: &[&'static Listing]) {
        let imp = self.imp();

        while let Some(child) = imp.container.first_child() {
            imp.container.remove(&child);
        }

        for listing in listings {
            imp.container.append(&self.build_card(listing));
        }
    }

    pub fn set_on_activated<F>(&self, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        self.imp().on_activated.replace(Some(Box::new(callback)));
    }

    pub fn set_actions(&self, actions: Rc<dyn ChromeActions>) {
        self.imp().actions.replace(Some(actions));
    }

    fn build_card(&self, listing: &'static Listing) -> ListingCard {
        let card = ListingCard::from_listing(listing);

        let this_weak = self.downgrade();
        card.connect_clicked(move |_| {
            if
                let Some(this) = this_weak.upgrade()
                && let Some(callback) = this.imp().on_activated.borrow().as_ref()
            {
                callback(listing.id);
            }
        });

        if let Some(actions) = self.imp().actions.borrow().as_ref() {
            let actions = Rc::clone(actions);
            card.connect_bookmark_clicked(move || actions.toggle_bookmark(listing.id));
        }

        card
    }

}

impl Default for ListingCarousel {
    fn default() -> Self {
        Self::new()
    }
}
