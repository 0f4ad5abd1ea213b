mod fixture;
mod row;

pub use fixture::*;
pub use row::*;
