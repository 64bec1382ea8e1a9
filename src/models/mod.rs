pub mod betting_ticket;
pub mod common;
pub mod pagination;
pub mod race;
pub mod top;
pub mod user;

pub use betting_ticket::*;
pub use common::*;
pub use pagination::*;
pub use race::*;
pub use top::*;
pub use user::*;
