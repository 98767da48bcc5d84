use crate::prelude::*;
use crate::parallax::ParallaxTransform;
use gtk::graphene::Point;
use std::cell::Cell;

mod parallax_header {
    use super::*;

    #[derive(Default)]
    pub struct ParallaxHeader {
        pub picture: gtk::Picture,
        pub transform: Cell<ParallaxTransform>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ParallaxHeader {
        const NAME: &'static str = "ParallaxHeader";
        type Type = super::ParallaxHeader;
        type ParentType = gtk::Widget;

        fn class_init(class: &mut Self::Class) {
            class.set_layout_manager_type::<gtk::BinLayout>();
        }
    }

    impl ObjectImpl for ParallaxHeader {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            // The stretched image must be able to paint outside its bounds;
            // the surrounding scrolled window still clips it.
            obj.set_overflow(gtk::Overflow::Visible);

            self.picture.set_content_fit(gtk::ContentFit::Cover);
            self.picture.add_css_class("parallax-header-image");
            self.picture.set_parent(&*obj);
        }

        fn dispose(&self) {
            self.picture.unparent();
        }
    }

    impl WidgetImpl for ParallaxHeader {
        fn snapshot(&self, snapshot: &gtk::Snapshot) {
            let widget = self.obj();
            let transform = self.transform.get();
            let width = widget.width() as f32;
            let height = widget.height() as f32;

            snapshot.save();
            snapshot.translate(&Point::new(0.0, transform.translate_y as f32));
            // Scale about the widget centre, matching the transform origin
            // the catalog images were designed against.
            snapshot.translate(&Point::new(width / 2.0, height / 2.0));
            snapshot.scale(transform.scale as f32, transform.scale as f32);
            snapshot.translate(&Point::new(-width / 2.0, -height / 2.0));
            widget.snapshot_child(&self.picture, snapshot);
            snapshot.restore();
        }
    }
}

glib::wrapper! {
    pub struct ParallaxHeader(ObjectSubclass<parallax_header::ParallaxHeader>)
        @extends gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl ParallaxHeader {
    pub fn new(image_uri: &str, height: i32) -> Self {
        let this: Self = glib::Object::builder().build();
        this.set_size_request(-1, height);
        super::load_picture_from_uri(&this.imp().picture, image_uri);
        this
    }

    pub fn set_transform(&self, transform: ParallaxTransform) {
        let imp = self.imp();
        if imp.transform.get() != transform {
            imp.transform.set(transform);
            self.queue_draw();
        }
    }
}

impl Default for ParallaxHeader {
    fn default() -> Self {
        Self::new("", 0)
    }
}
