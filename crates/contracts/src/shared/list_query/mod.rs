pub mod criteria;
pub mod page;
pub mod value;

pub use criteria::*;
pub use page::*;
pub use value::*;
