pub mod app_login;
pub mod app_post;
pub mod app_root;
