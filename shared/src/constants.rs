pub static STORAGE_KEY_USER_DETAILS: &'static str = "userDetails";

pub static ROUTE_LOGIN: &'static str = "/";
pub static ROUTE_POST: &'static str = "/post";

pub static DEFAULT_AUTH_URL: &'static str = "https://api.supermetrics.com/assignment/register";
