pub mod navigation;
pub mod profile_card;
