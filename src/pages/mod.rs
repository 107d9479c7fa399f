mod activity_detail;
mod contact;
mod home;
mod not_found;

pub use activity_detail::ActivityDetail;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
