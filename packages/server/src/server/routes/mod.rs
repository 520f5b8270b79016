// HTTP routes
pub mod health;
pub mod listings;
pub mod market;
pub mod profiles;
pub mod trades;

pub use health::*;
pub use listings::*;
pub use market::*;
pub use profiles::*;
pub use trades::*;
