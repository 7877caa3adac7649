//! Data transfer objects
//!
//! Wire shapes of the backend API. Field names follow the backend (Spanish);
//! the rest of the crate only sees the domain types these convert into.

pub mod requests;
pub mod responses;

pub use requests::{
    ChangeStateRequest, CharacterPayload, ChooseSkillsRequest, CreateCatalogEntryRequest,
    LoginRequest, RegisterRequest, SetOptionsRequest,
};
pub use responses::{
    CatalogEntryDto, CharacterDto, RegisterResponse, TokenResponse, WhoAmIResponse,
};
