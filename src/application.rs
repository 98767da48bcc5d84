use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;
use super::actions::{ChromeActions, NoopChromeActions};
use super::constants;
use super::controllers::{CategoryFilter, ListingActivation};
use super::repository::Repository;
use super::widgets::{HomePage, Window};

struct WindowControllers {
    _category_filter: CategoryFilter,
    _listing_activation: ListingActivation,
}

struct ApplicationState {
    application: adw::Application,
    repository: Repository<'static>,
    actions: Rc<dyn ChromeActions>,
    controllers: RefCell<Option<WindowControllers>>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new() -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            adw::gio::ApplicationFlags::default()
        );

        let repository = Repository::new(&constants::APP_CATALOG);
        let state = Rc::new(ApplicationState {
            application,
            repository,
            actions: Rc::new(NoopChromeActions),
            controllers: RefCell::new(None),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_activate_event(state);
        Self::setup_startup_event(state);
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            this.setup_ui().unwrap();
        });
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |_application| {
            Self::setup_resources().unwrap();
        });
    }

    fn setup_ui(&self) -> Result<()> {
        let window = Window::new(&self.state.application);
        let repository = self.state.repository;

        let home = window.home_page();
        home.listing_carousel().set_actions(Rc::clone(&self.state.actions));
        home.group_carousel().set_actions(Rc::clone(&self.state.actions));
        home.category_bar().set_categories(repository.categories());
        home.group_carousel().bind(repository.groups());
        self.setup_chrome(home);

        let category_filter = CategoryFilter::new(
            repository,
            home.category_bar().clone(),
            home.listing_carousel().clone(),
        );
        category_filter.apply_initial();

        let listing_activation = ListingActivation::new(
            repository,
            window.navigation_view().clone(),
            home.listing_carousel().clone(),
            Rc::clone(&self.state.actions),
        );

        self.state.controllers.replace(Some(WindowControllers {
            _category_filter: category_filter,
            _listing_activation: listing_activation,
        }));

        window.present();
        Ok(())
    }

    fn setup_chrome(&self, home: &HomePage) {
        let actions = Rc::clone(&self.state.actions);
        home.search_entry().connect_activate(move |entry| {
            actions.search(entry.text().as_str());
        });

        let actions = Rc::clone(&self.state.actions);
        home.filter_button().connect_clicked(move |_| actions.open_filters());

        let actions = Rc::clone(&self.state.actions);
        home.notifications_button().connect_clicked(move |_| actions.open_notifications());

        let actions = Rc::clone(&self.state.actions);
        home.profile_button().connect_clicked(move |_| actions.open_profile());
    }

    fn setup_resources() -> Result<()> {
        gtk::glib::set_application_name(constants::APP_TITLE);
        gtk::glib::set_prgname(Some(constants::APP_NAME));
        gtk::gio::resources_register_include_impl(constants::APP_RESOURCES)?;

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_resource(&format!("{}/style.css", constants::APP_PREFIX));

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        let result = self.state.application.run();
        if matches!(result, adw::glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }

}
