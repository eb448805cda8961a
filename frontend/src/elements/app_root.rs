use std::rc::Rc;

use dominator::{clone, html, routing, Dom};
use futures_signals::signal::SignalExt;

use crate::constants::TAG_DIV;
use crate::elements::app_login::app_login;
use crate::elements::app_post::app_post;
use crate::state::AppState;
use crate::types::Route;
use crate::utils::url_path;

pub fn app_root(app: Rc<AppState>) -> Dom {
    html!(TAG_DIV, {
        .class("app-root")
        .child_signal(routing::url()
            .signal_ref(|url| Route::from_path(&url_path(url)))
            .dedupe()
            .map(clone!(app => move |route| {
                log::debug!("route {:?}", route);
                Some(match route {
                    Route::Login => app_login(&app),
                    Route::Post => app_post(&app),
                })
            })))
    })
}
