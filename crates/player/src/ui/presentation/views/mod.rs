//! Page-level views

pub mod catalog;
pub mod characters_gm;
pub mod characters_player;
pub mod login;
pub mod register;

pub use catalog::CatalogView;
pub use characters_gm::CharactersGmView;
pub use characters_player::CharactersPlayerView;
pub use login::LoginView;
pub use register::RegisterView;
