use crate::prelude::*;
use super::home_page::HomePage;

use gtk::gio::{ActionGroup, ActionMap};

mod window {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/dev/wayfarer/ui/window.ui")]
    pub struct Window {
        #[template_child(id = "navigation-view")]
        pub navigation_view: TemplateChild<adw::NavigationView>,
        #[template_child(id = "home-page")]
        pub home_page: TemplateChild<HomePage>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Window {
        const NAME: &'static str = "Window";
        type Type = super::Window;
        type ParentType = adw::ApplicationWindow;

        fn class_init(class: &mut Self::Class) {
            HomePage::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Window {
        fn constructed(&self) {
            self.parent_constructed();
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for Window {}
    impl WindowImpl for Window {}
    impl ApplicationWindowImpl for Window {}
    impl AdwApplicationWindowImpl for Window {}
}

glib::wrapper! {
    pub struct Window(ObjectSubclass<window::Window>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager, ActionMap, ActionGroup;
}

impl Window {
    pub fn new(application: &adw::Application) -> Self {
        glib::Object::builder()
            .property("application", application)
            .build()
    }

    pub fn navigation_view(&self) -> &adw::NavigationView {
        &self.imp().navigation_view
    }

    pub fn home_page(&self) -> &HomePage {
        &self.imp().home_page
    }
}
