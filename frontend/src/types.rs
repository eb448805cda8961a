use shared::constants::{ROUTE_LOGIN, ROUTE_POST};
use shared::types::SessionUser;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub email: String,
}

/// Authenticated identity kept in the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub client_id: String,
    pub sl_token: String,
    pub email: String,
}

impl From<SessionUser> for User {
    fn from(src: SessionUser) -> Self {
        Self {
            client_id: src.client_id,
            sl_token: src.sl_token,
            email: src.email,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Post,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path == ROUTE_POST || path.starts_with(&format!("{ROUTE_POST}/")) {
            Route::Post
        } else {
            Route::Login
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => ROUTE_LOGIN,
            Route::Post => ROUTE_POST,
        }
    }
}
