/// Extension points for the chrome interactions that are intentionally inert
/// today. Screens route every tap through this trait instead of inline empty
/// closures, so behavior can be injected without touching rendering code.
pub trait ChromeActions {
    fn search(&self, _query: &str) {}
    fn open_filters(&self) {}
    fn open_notifications(&self) {}
    fn open_profile(&self) {}
    fn toggle_bookmark(&self, _listing_id: &str) {}
    fn book(&self, _listing_id: &str) {}
    fn open_group(&self, _group_id: &str) {}
}

pub struct NoopChromeActions;

impl ChromeActions for NoopChromeActions {}
