//! Page components for SrefHub.

mod admin;
mod dashboard;
mod explore;
mod gallery;
mod home;
mod login;

pub use admin::Admin;
pub use dashboard::Dashboard;
pub use explore::Explore;
pub use gallery::Gallery;
pub use home::Home;
pub use login::Login;
