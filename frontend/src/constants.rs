pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_DISABLED: &'static str = "disabled";

pub static TAG_DIV: &'static str = "div";
pub static TAG_H3: &'static str = "h3";
pub static TAG_P: &'static str = "p";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_BUTTON: &'static str = "button";

pub static TEXT_LOGIN: &'static str = "Login";
pub static TEXT_NAME: &'static str = "Name";
pub static TEXT_NAME_HINT: &'static str = "Enter your name";
pub static TEXT_EMAIL: &'static str = "Email";
pub static TEXT_EMAIL_HINT: &'static str = "Enter your email";
pub static TEXT_GO: &'static str = "Go";
pub static TEXT_LOADING: &'static str = "Loading...";
pub static TEXT_POSTS: &'static str = "Posts";
pub static TEXT_SIGNED_IN: &'static str = "Signed in as";
pub static TEXT_NO_SESSION: &'static str = "You are not signed in.";

pub const LOGIN_ERROR: &str = "Login failed. Please check your name and email and try again.";
