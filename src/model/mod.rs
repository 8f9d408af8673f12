mod error;
mod page;
mod policy;
mod request;
mod state;

pub use error::*;
pub use page::*;
pub use policy::*;
pub use request::*;
pub use state::*;
