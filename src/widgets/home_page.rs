use crate::prelude::*;
use super::{CategoryBar, GroupCarousel, ListingCarousel};

mod home_page {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/dev/wayfarer/ui/home_page.ui")]
    pub struct HomePage {
        #[template_child(id = "profile-button")]
        pub profile_button: TemplateChild<gtk::Button>,
        #[template_child(id = "notifications-button")]
        pub notifications_button: TemplateChild<gtk::Button>,
        #[template_child(id = "search-entry")]
        pub search_entry: TemplateChild<gtk::SearchEntry>,
        #[template_child(id = "filter-button")]
        pub filter_button: TemplateChild<gtk::Button>,
        #[template_child(id = "category-bar")]
        pub category_bar: TemplateChild<CategoryBar>,
        #[template_child(id = "listing-carousel")]
        pub listing_carousel: TemplateChild<ListingCarousel>,
        #[template_child(id = "group-carousel")]
        pub group_carousel: TemplateChild<GroupCarousel>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for HomePage {
        const NAME: &'static str = "HomePage";
        type Type = super::HomePage;
        type ParentType = adw::NavigationPage;

        fn class_init(class: &mut Self::Class) {
            CategoryBar::ensure_type();
            ListingCarousel::ensure_type();
            GroupCarousel::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for HomePage {
        fn constructed(&self) {
            self.parent_constructed();
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for HomePage {}
    impl NavigationPageImpl for HomePage {}
}

glib::wrapper! {
    pub struct HomePage(ObjectSubclass<home_page::HomePage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl HomePage {

    pub fn profile_button(&self) -> &gtk::Button {
        &self.imp().profile_button
    }

    pub fn notifications_button(&self) -> &gtk::Button {
        &self.imp().notifications_button
    }

    pub fn search_entry(&self) -> &gtk::SearchEntry {
        &self.imp().search_entry
    }

    pub fn filter_button(&self) -> &gtk::Button {
        &self.imp().filter_button
    }

    pub fn category_bar(&self) -> &CategoryBar {
        &self.imp().category_bar
    }

    pub fn listing_carousel(&self) -> &ListingCarousel {
        &self.imp().listing_carousel
    }

    pub fn group_carousel(&self) -> &GroupCarousel {
        &self.imp().group_carousel
    }

}
