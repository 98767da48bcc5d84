use crate::prelude::*;
use crate::actions::ChromeActions;
use crate::controllers::ParallaxScroll;
use crate::models::Listing;
use crate::parallax::HEADER_IMAGE_HEIGHT;
use super::ParallaxHeader;
use std::cell::RefCell;
use std::rc::Rc;

mod detail_page {
    use super::*;

    #[derive(Default)]
    pub struct DetailPage {
        pub parallax: RefCell<Option<ParallaxScroll>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for DetailPage {
        const NAME: &'static str = "DetailPage";
        type Type = super::DetailPage;
        type ParentType = adw::NavigationPage;
    }

    impl ObjectImpl for DetailPage {}
    impl WidgetImpl for DetailPage {}
    impl NavigationPageImpl for DetailPage {}
}

glib::wrapper! {
    pub struct DetailPage(ObjectSubclass<detail_page::DetailPage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl DetailPage {

    /// Renders either the listing or a not-found fallback; a missing record
    /// must never take the screen down.
    pub fn new(listing: Option<&'static Listing>, actions: &Rc<dyn ChromeActions>) -> Self {
        let this: Self = glib::Object::builder()
            .property("title", listing.map_or("Not found", |listing| listing.name))
            .build();

        match listing {
            Some(listing) => this.build_listing_content(listing, actions),
            None => this.build_missing_content(),
        }

        this
    }

    fn build_listing_content(&self, listing: &'static Listing, actions: &Rc<dyn ChromeActions>) {
        #[allow(clippy::cast_possible_truncation)]
        let header = ParallaxHeader::new(listing.image, HEADER_IMAGE_HEIGHT as i32);

        let content = gtk::Box::new(gtk::Orientation::Vertical, 0);
        content.append(&header);
        content.append(&Self::build_details(listing));

        let scrolled_window = gtk::ScrolledWindow::new();
        scrolled_window.set_policy(gtk::PolicyType::Never, gtk::PolicyType::Automatic);
        scrolled_window.set_vexpand(true);
        scrolled_window.set_child(Some(&content));

        let overlay = gtk::Overlay::new();
        overlay.set_child(Some(&scrolled_window));
        overlay.add_overlay(&Self::build_footer(listing, actions));

        let header_bar = adw::HeaderBar::new();
        header_bar.set_show_title(false);
        header_bar.pack_end(&Self::build_bookmark_button(listing, actions));

        let toolbar_view = adw::ToolbarView::new();
        toolbar_view.add_top_bar(&header_bar);
        toolbar_view.set_top_bar_style(adw::ToolbarStyle::Flat);
        toolbar_view.set_extend_content_to_top_edge(true);
        toolbar_view.set_content(Some(&overlay));

        self.set_child(Some(&toolbar_view));

        let parallax = ParallaxScroll::new(scrolled_window, header);
        self.imp().parallax.replace(Some(parallax));
    }

    fn build_missing_content(&self) {
        let status_page = adw::StatusPage::new();
        status_page.set_icon_name(Some("edit-find-symbolic"));
        status_page.set_title("Listing not found");
        status_page.set_description(Some("This listing is no longer in the catalog."));
        self.set_child(Some(&status_page));
    }

    fn build_details(listing: &'static Listing) -> gtk::Box {
        let name_label = gtk::Label::new(Some(listing.name));
        name_label.set_xalign(0.0);
        name_label.set_wrap(true);
        name_label.add_css_class("title-2");

        let location_row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        location_row.append(&gtk::Image::from_icon_name("mark-location-symbolic"));
        let location_label = gtk::Label::new(Some(listing.location));
        location_label.add_css_class("dim-label");
        location_row.append(&location_label);

        let description_label = gtk::Label::new(Some(listing.description));
        description_label.set_xalign(0.0);
        description_label.set_wrap(true);
        description_label.add_css_class("body");

        let details = gtk::Box::new(gtk::Orientation::Vertical, 12);
        details.set_margin_top(20);
        details.set_margin_bottom(96);
        details.set_margin_start(20);
        details.set_margin_end(20);
        details.append(&name_label);
        details.append(&location_row);
        details.append(&Self::build_duration_highlight(listing));
        details.append(&description_label);
        details
    }

    // The source material also derived "Users" and "Rating" highlights from
    // the duration field; those two are omitted rather than guessed at.
    fn build_duration_highlight(listing: &'static Listing) -> gtk::Box {
        let icon = gtk::Image::from_icon_name("alarm-symbolic");
        icon.add_css_class("highlight-icon");

        let caption = gtk::Label::new(Some("Duration"));
        caption.set_xalign(0.0);
        caption.add_css_class("caption");
        caption.add_css_class("dim-label");

        let value = gtk::Label::new(Some(&format!("{} days", listing.duration)));
        value.set_xalign(0.0);
        value.add_css_class("heading");

        let text = gtk::Box::new(gtk::Orientation::Vertical, 2);
        text.append(&caption);
        text.append(&value);

        let highlight = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        highlight.append(&icon);
        highlight.append(&text);
        highlight
    }

    fn build_footer(listing: &'static Listing, actions: &Rc<dyn ChromeActions>) -> gtk::Box {
        let book_button = gtk::Button::with_label("Book Now");
        book_button.set_hexpand(true);
        book_button.add_css_class("suggested-action");
        book_button.add_css_class("pill");

        let actions = Rc::clone(actions);
        book_button.connect_clicked(move |_| actions.book(listing.id));

        let price_button = gtk::Button::with_label(listing.price);
        price_button.add_css_class("pill");

        let footer = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        footer.set_valign(gtk::Align::End);
        footer.set_margin_start(20);
        footer.set_margin_end(20);
        footer.set_margin_bottom(20);
        footer.add_css_class("detail-footer");
        footer.append(&book_button);
        footer.append(&price_button);
        footer
    }

    fn build_bookmark_button(listing: &'static Listing, actions: &Rc<dyn ChromeActions>) -> gtk::Button {
        let button = gtk::Button::from_icon_name("user-bookmarks-symbolic");
        button.add_css_class("osd");
        button.add_css_class("circular");

        let actions = Rc::clone(actions);
        button.connect_clicked(move |_| actions.toggle_bookmark(listing.id));
        button
    }

}
