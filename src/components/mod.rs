pub mod activity_cards;
pub mod call_to_action;
pub mod layout;

pub use activity_cards::ActivityCards;
pub use call_to_action::CallToAction;
pub use layout::{SiteFooter, SiteHeader};
