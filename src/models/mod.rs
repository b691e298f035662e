pub mod order;
pub mod supply;
pub mod value;

pub use order::*;
pub use supply::*;
pub use value::*;
