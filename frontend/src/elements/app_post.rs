use std::rc::Rc;

use dominator::{events, html, routing, Dom};
use futures_signals::signal::SignalExt;

use crate::constants::{TAG_BUTTON, TAG_DIV, TAG_P, TEXT_LOGIN, TEXT_NO_SESSION, TEXT_POSTS, TEXT_SIGNED_IN};
use crate::state::AppState;
use crate::types::{Route, User};
use crate::utils::set_title;

fn css_class(label: &str) -> String {
    format!("app-post__{label}")
}

/// Landing view after login; reads the user the login screen stored.
pub fn app_post(app: &Rc<AppState>) -> Dom {
    set_title(TEXT_POSTS);
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child_signal(app.current_user().signal_cloned().map(|user| Some(match user {
            Some(user) => signed_in(&user),
            None => signed_out(),
        })))
    })
}

fn signed_in(user: &User) -> Dom {
    html!(TAG_P, {
        .class(css_class("user"))
        .text(&format!("{TEXT_SIGNED_IN} {}", user.email))
    })
}

fn signed_out() -> Dom {
    html!(TAG_DIV, {
        .children([
            html!(TAG_P, {
                .text(TEXT_NO_SESSION)
            }),
            html!(TAG_BUTTON, {
                .class(css_class("button"))
                .text(TEXT_LOGIN)
                .event(|_: events::Click| routing::go_to_url(Route::Login.path()))
            }),
        ])
    })
}
