use crate::prelude::*;
use crate::models::Category;
use std::cell::RefCell;

type SelectedCallback = Box<dyn Fn(&'static Category) + 'static>;

mod category_bar {
    use super::*;

    #[derive(Default)]
    pub struct CategoryBar {
        pub scrolled_window: gtk::ScrolledWindow,
        pub container: gtk::Box,
        pub on_selected: RefCell<Option<SelectedCallback>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CategoryBar {
        const NAME: &'static str = "CategoryBar";
        type Type = super::CategoryBar;
        type ParentType = gtk::Widget;

        fn class_init(class: &mut Self::Class) {
            class.set_layout_manager_type::<gtk::BinLayout>();
        }
    }

    impl ObjectImpl for CategoryBar {
        fn constructed(&self) {
            self.parent_constructed();

            self.container.set_spacing(12);
            self.scrolled_window.set_policy(gtk::PolicyType::External, gtk::PolicyType::Never);
            self.scrolled_window.set_child(Some(&self.container));
            self.scrolled_window.set_parent(&*self.obj());
        }

        fn dispose(&self) {
            self.scrolled_window.unparent();
        }
    }

    impl WidgetImpl for CategoryBar {}
}

glib::wrapper! {
    pub struct CategoryBar(ObjectSubclass<category_bar::CategoryBar>)
        @extends gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl CategoryBar {

    pub fn new() -> Self {
        glib::Object::builder().build()
    }

    /// Rebuilds the chip row. The first category starts out active and acts
    /// as the selection-group leader.
    pub fn set_categories(&self, categories: &'static [Category]) {
        let imp = self.imp();

        while let Some(child) = imp.container.first_child() {
            imp.container.remove(&child);
        }

        let mut leader: Option<gtk::ToggleButton> = None;
        for category in categories {
            let button = Self::build_chip(category);
            if let Some(leader) = &leader {
                button.set_group(Some(leader));
            } else {
                button.set_active(true);
                leader = Some(button.clone());
            }

            let this_weak = self.downgrade();
            button.connect_toggled(move |button| {
                if
                    button.is_active()
                    && let Some(this) = this_weak.upgrade()
                    && let Some(callback) = this.imp().on_selected.borrow().as_ref()
                {
                    callback(category);
                }
            });

            imp.container.append(&button);
        }
    }

    pub fn set_on_selected<F>(&self, callback: F)
    where
        F: Fn(&'static Category) + 'static,
    {
        self.imp().on_selected.replace(Some(Box::new(callback)));
    }

    fn build_chip(category: &Category) -> gtk::ToggleButton {
        let content = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        content.append(&gtk::Image::from_icon_name(category.icon));
        content.append(&gtk::Label::new(Some(category.name)));

        let button = gtk::ToggleButton::new();
        button.set_child(Some(&content));
        button.add_css_class("category-chip");
        button
    }

}

impl Default for CategoryBar {
    fn default() -> Self {
        Self::new()
    }
}
