pub mod error;
pub use error::*;
pub mod record;
pub use record::*;
pub mod traits;
pub use traits::*;
