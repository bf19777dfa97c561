pub mod date;
pub mod date_range;
pub mod input;
pub mod jalaali;
pub mod locale;
pub mod record;
pub mod system;

pub use date::*;
pub use date_range::*;
pub use input::*;
pub use locale::*;
pub use record::*;
pub use system::*;
