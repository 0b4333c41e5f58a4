pub mod distribution;
pub mod distributor;
pub mod participants;
pub mod rounds;

pub use distribution::*;
pub use distributor::*;
pub use participants::*;
pub use rounds::*;
