pub mod book;
pub mod commands;
pub mod errors;
pub mod member;
pub mod policy;
pub mod value_objects;

pub use book::{Book, Loan};
pub use errors::*;
pub use member::Member;
pub use policy::*;
pub use value_objects::*;
