pub mod account;
pub mod dto;
pub mod error;
pub mod token_claim;
pub use account::{Account, NewAccount};
pub use error::Error;
pub use token_claim::TokenClaim;
