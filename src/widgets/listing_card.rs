use crate::prelude::*;
use crate::models::Listing;
use glib::{GString, Properties};
use std::cell::RefCell;

mod listing_card {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, Properties)]
    #[template(resource = "/dev/wayfarer/ui/listing_card.ui")]
    #[properties(wrapper_type = super::ListingCard)]
    pub struct ListingCard {
        #[template_child(id = "card-image")]
        pub image_widget: TemplateChild<gtk::Picture>,
        #[template_child(id = "card-bookmark")]
        pub bookmark_button: TemplateChild<gtk::Button>,
        #[template_child(id = "card-name")]
        pub name_widget: TemplateChild<gtk::Label>,
        #[template_child(id = "card-location")]
        pub location_widget: TemplateChild<gtk::Label>,
        #[template_child(id = "card-price")]
        pub price_widget: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub name: RefCell<GString>,
        #[property(get, set)]
        pub location: RefCell<GString>,
        #[property(get, set)]
        pub price: RefCell<GString>,
        #[property(get, set)]
        pub image: RefCell<GString>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ListingCard {
        const NAME: &'static str = "ListingCard";
        type Type = super::ListingCard;
        type ParentType = gtk::Button;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for ListingCard {
        fn properties() -> &'static [glib::ParamSpec] {
            Self::derived_properties()
        }

        fn set_property(&self, id: usize, value: &glib::Value, pspec: &glib::ParamSpec) {
            self.derived_set_property(id, value, pspec)
        }

        fn property(&self, id: usize, pspec: &glib::ParamSpec) -> glib::Value {
            self.derived_property(id, pspec)
        }

        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.connect_name_notify(|card| {
                card.imp().name_widget.set_label(&card.name());
            });
            obj.connect_location_notify(|card| {
                card.imp().location_widget.set_label(&card.location());
            });
            obj.connect_price_notify(|card| {
                card.imp().price_widget.set_label(&card.price());
            });
            obj.connect_image_notify(|card| {
                crate::widgets::load_picture_from_uri(&card.imp().image_widget, &card.image());
            });
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for ListingCard {}
    impl ButtonImpl for ListingCard {}
}

glib::wrapper! {
    pub struct ListingCard(ObjectSubclass<listing_card::ListingCard>)
        @extends gtk::Button, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Actionable;
}

impl ListingCard {

    pub fn from_listing(listing: &'static Listing) -> Self {
        glib::Object::builder::<Self>()
            .property("name", listing.name)
            .property("location", listing.location)
            .property("price", listing.price)
            .property("image", listing.image)
            .build()
    }

    pub fn connect_bookmark_clicked<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.imp().bookmark_button.connect_clicked(move |_| callback());
    }

}
