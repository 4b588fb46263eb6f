pub mod position;
pub mod string;

pub use position::{offset_at, position_of};
pub use string::{clean_name, is_computed_name};
