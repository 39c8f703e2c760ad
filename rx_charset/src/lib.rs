
mod sorted;
mod set;

pub use set::Set;
