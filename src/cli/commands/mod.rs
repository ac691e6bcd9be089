pub mod check;
pub mod lookup;
pub mod roles;
pub mod token;
