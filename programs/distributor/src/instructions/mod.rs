pub mod deposit_tokens;
pub mod emit_vesting_quote;
pub mod participate;
pub mod register;
pub mod set_address_distribution_amount;
pub mod set_distribution_parameters;
pub mod set_distribution_round;
pub mod set_registration_round;
pub mod set_vesting_params;
pub mod stop_registration_round;
pub mod withdraw;

pub use deposit_tokens::*;
pub use emit_vesting_quote::*;
pub use participate::*;
pub use register::*;
pub use set_address_distribution_amount::*;
pub use set_distribution_parameters::*;
pub use set_distribution_round::*;
pub use set_registration_round::*;
pub use set_vesting_params::*;
pub use stop_registration_round::*;
pub use withdraw::*;
