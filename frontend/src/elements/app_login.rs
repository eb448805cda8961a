use std::rc::Rc;

use dominator::{clone, events, html, with_node, Dom};
use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use shared::constants::{ROUTE_POST, STORAGE_KEY_USER_DETAILS};

use crate::config::CONFIG;
use crate::connect_fetch::FetchAuthClient;
use crate::constants::{
    PROP_DISABLED, PROP_NAME, PROP_PLACEHOLDER, PROP_TYPE, PROP_VALUE, TAG_DIV, TAG_H3, TAG_INPUT, TEXT_EMAIL,
    TEXT_EMAIL_HINT, TEXT_GO, TEXT_LOADING, TEXT_LOGIN, TEXT_NAME, TEXT_NAME_HINT,
};
use crate::login::controller::{LoginController, LoginServices};
use crate::navigation::UrlNavigator;
use crate::state::AppState;
use crate::storage::LocalSessionStorage;
use crate::utils::{focus_input, set_title};

const KEY_ENTER: &str = "Enter";
const FIELD_NAME: &str = "name";
const FIELD_EMAIL: &str = "email";

fn css_class(label: &str) -> String {
    format!("app-login__{label}")
}

/// Login screen. The session check runs once the node is inserted and any
/// pending request is abandoned when the node is removed.
pub fn app_login(app: &Rc<AppState>) -> Dom {
    set_title(TEXT_LOGIN);
    let controller = LoginController::new(LoginServices {
        storage: Rc::new(LocalSessionStorage::new(STORAGE_KEY_USER_DETAILS)),
        auth: Rc::new(FetchAuthClient::new(&CONFIG)),
        users: app.clone(),
        navigator: Rc::new(UrlNavigator),
    }, ROUTE_POST);

    html!(TAG_DIV, {
        .class(css_class("container"))
        .after_inserted(clone!(controller => move |_| controller.bootstrap()))
        .after_removed(clone!(controller => move |_| controller.dispose()))
        .child_signal(controller.form_visible_signal().map(clone!(controller => move |visible| {
            Some(if visible { login_page(&controller) } else { loading() })
        })))
    })
}

fn loading() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("loading"))
        .text(TEXT_LOADING)
    })
}

fn login_page(controller: &Rc<LoginController>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("card"))
        .children([
            html!(TAG_H3, {
                .class(css_class("header"))
                .text(TEXT_LOGIN)
            }),
            html!(TAG_DIV, {
                .class(css_class("form"))
                .children([
                    text_field(TEXT_NAME, TEXT_NAME_HINT, FIELD_NAME, clone!(controller => move |value| controller.set_name(value)), handle_key_name),
                    text_field(TEXT_EMAIL, TEXT_EMAIL_HINT, FIELD_EMAIL, clone!(controller => move |value| controller.set_email(value)), clone!(controller => move |ev: events::KeyDown| {
                        if ev.key() == KEY_ENTER {
                            submit(&controller);
                        }
                    })),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("message"))
                .text_signal(controller.screen_state_signal().map(|state| state.error_message.map(|text| format!("*{text}")).unwrap_or_default()))
            }),
            html!(TAG_INPUT, {
                .class(css_class("button"))
                .class_signal(css_class("button--busy"), submitting_signal(controller))
                .attr(PROP_TYPE, "button")
                .prop_signal(PROP_VALUE, submitting_signal(controller).map(|busy| if busy { TEXT_LOADING } else { TEXT_GO }))
                .prop_signal(PROP_DISABLED, submitting_signal(controller))
                .event(clone!(controller => move |_: events::Click| submit(&controller)))
            }),
        ])
    })
}

fn submitting_signal(controller: &LoginController) -> impl Signal<Item = bool> {
    controller.screen_state_signal().map(|state| state.is_submitting).dedupe()
}

fn text_field<F, K>(label: &str, placeholder: &str, field: &str, on_input: F, on_key: K) -> Dom
    where
        F: Fn(String) + 'static,
        K: FnMut(events::KeyDown) + 'static
{
    html!(TAG_DIV, {
        .class(css_class("field"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("label"))
                .text(label)
            }),
            html!(TAG_INPUT => HtmlInputElement, {
                .class(css_class("input"))
                .attr(PROP_TYPE, "text")
                .attr(PROP_NAME, field)
                .attr(PROP_PLACEHOLDER, placeholder)
                .with_node!(element => {
                    .event(move |_: events::Input| on_input(element.value()))
                })
                .event(on_key)
            }),
        ])
    })
}

fn handle_key_name(ev: events::KeyDown) {
    if ev.key() == KEY_ENTER {
        focus_input(FIELD_EMAIL);
    }
}

fn submit(controller: &Rc<LoginController>) {
    spawn_local(controller.submit());
}
