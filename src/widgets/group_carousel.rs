use crate::prelude::*;
use crate::actions::ChromeActions;
use crate::models::Group;
use super::GroupCard;
use std::cell::RefCell;
use std::rc::Rc;

mod group_carousel {
    use super::*;

    #[derive(Default)]
    pub struct GroupCarousel {
        pub scrolled_window: gtk::ScrolledWindow,
        pub container: gtk::Box,
        pub actions: RefCell<Option<Rc<dyn ChromeActions>>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for GroupCarousel {
        const NAME: &'static str = "GroupCarousel";
        type Type = super::GroupCarousel;
        type ParentType = gtk::Widget;

        fn class_init(class: &mut Self::Class) {
            class.set_layout_manager_type::<gtk::BinLayout>();
        }
    }

    impl ObjectImpl for GroupCarousel {
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

    impl WidgetImpl for GroupCarousel {}
}

glib::wrapper! {
    pub struct GroupCarousel(ObjectSubclass<group_carousel::GroupCarousel>)
        @extends gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl GroupCarousel {

    pub fn new() -> Self {
        glib::Object::builder().build()
    }

    pub fn bind(&self, groups: &'static [Group]) {
        let imp = self.imp();

        while let Some(child) = imp.container.first_child() {
            imp.container.remove(&child);
        }

        for group in groups {
            let card = GroupCard::from_group(group);
            if let Some(actions) = imp.actions.borrow().as_ref() {
                let actions = Rc::clone(actions);
                card.connect_clicked(move |_| actions.open_group(group.id));
            }
            imp.container.append(&card);
        }
    }

    pub fn set_actions(&self, actions: Rc<dyn ChromeActions>) {
        self.imp().actions.replace(Some(actions));
    }

}

impl Default for GroupCarousel {
    fn default() -> Self {
        Self::new()
    }
}
