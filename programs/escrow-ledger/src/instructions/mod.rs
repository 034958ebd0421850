pub mod authorized_address;
pub mod deposit_native;
pub mod deposit_token;
pub mod initialize;
pub mod open_token_vault;
pub mod withdraw_native;
pub mod withdraw_token;

pub use authorized_address::*;
pub use deposit_native::*;
pub use deposit_token::*;
pub use initialize::*;
pub use open_token_vault::*;
pub use withdraw_native::*;
pub use withdraw_token::*;

#[cfg(test)]
mod tests;
