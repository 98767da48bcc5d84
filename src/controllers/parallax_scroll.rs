use crate::prelude::*;
use crate::parallax::{HEADER_IMAGE_HEIGHT, compute_transform};
use crate::widgets::ParallaxHeader;
use std::rc::{Rc, Weak};

struct State {
    scrolled_window: gtk::ScrolledWindow,
    header: ParallaxHeader,
}

struct WeakParallaxScroll {
    state: Weak<State>,
}

impl WeakParallaxScroll {
    fn upgrade(&self) -> Option<ParallaxScroll> {
        self.state.upgrade().map(|state| ParallaxScroll { state })
    }
}

/// Recomputes the header transform on every scroll-position change. The
/// computation itself is pure and allocation free, so running it at the
/// adjustment's notification rate keeps the header in sync with the frame
/// clock without further throttling.
pub struct ParallaxScroll {
    state: Rc<State>,
}

impl ParallaxScroll {

    pub fn new(scrolled_window: gtk::ScrolledWindow, header: ParallaxHeader) -> Self {
        let state = Rc::new(State {
            scrolled_window,
            header,
        });

        let this = Self { state };
        this.setup_offset_handler();
        this.apply_offset();
        this
    }

    fn setup_offset_handler(&self) {
        let this_weak = self.downgrade();
        self.state.scrolled_window.vadjustment().connect_value_changed(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.apply_offset();
            }
        });
    }

    fn apply_offset(&self) {
        let offset = self.state.scrolled_window.vadjustment().value();
        let transform = compute_transform(offset, HEADER_IMAGE_HEIGHT);
        self.state.header.set_transform(transform);
    }

    fn downgrade(&self) -> WeakParallaxScroll {
        let state = Rc::downgrade(&self.state);
        WeakParallaxScroll { state }
    }

}
