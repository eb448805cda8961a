use crate::config::CONFIG;
use crate::elements::app_root::app_root;
use crate::state::AppState;

mod config;
mod connect_fetch;
mod constants;
mod elements;
mod login;
mod navigation;
mod state;
mod storage;
mod types;
mod utils;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    if CONFIG.client_id.is_empty() {
        log::warn!("AUTH_CLIENT_ID was not set at build time, logins will be rejected");
    }
    log::info!("auth endpoint {}", CONFIG.auth_url);
    dominator::append_dom(&dominator::body(), app_root(AppState::new()));
}
