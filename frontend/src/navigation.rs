use dominator::routing;

use crate::login::Navigator;

/// Pushes a new history entry; `app_root` re-renders from the url signal.
pub struct UrlNavigator;

impl Navigator for UrlNavigator {
    fn go_to(&self, path: &str) {
        log::info!("navigate to {path}");
        routing::go_to_url(path);
    }
}
