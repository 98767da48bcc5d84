use crate::prelude::*;
use crate::models::Group;
use glib::{GString, Properties};
use std::cell::RefCell;

mod group_card {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, Properties)]
    #[template(resource = "/dev/wayfarer/ui/group_card.ui")]
    #[properties(wrapper_type = super::GroupCard)]
    pub struct GroupCard {
        #[template_child(id = "group-image")]
        pub image_widget: TemplateChild<gtk::Picture>,
        #[template_child(id = "group-name")]
        pub name_widget: TemplateChild<gtk::Label>,
        #[template_child(id = "group-location")]
        pub location_widget: TemplateChild<gtk::Label>,
        #[template_child(id = "group-price")]
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
    impl ObjectSubclass for GroupCard {
        const NAME: &'static str = "GroupCard";
        type Type = super::GroupCard;
        type ParentType = gtk::Button;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for GroupCard {
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

    impl WidgetImpl for GroupCard {}
    impl ButtonImpl for GroupCard {}
}

glib::wrapper! {
    pub struct GroupCard(ObjectSubclass<group_card::GroupCard>)
        @extends gtk::Button, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Actionable;
}

impl GroupCard {
    pub fn from_group(group: &'static Group) -> Self {
        glib::Object::builder::<Self>()
            .property("name", group.name)
            .property("location", group.location)
            .property("price", group.price)
            .property("image", group.image)
            .build()
    }
}
