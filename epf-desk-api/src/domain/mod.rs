pub mod field_rules;
pub mod transition;
pub mod work_status;

pub use field_rules::*;
pub use transition::*;
pub use work_status::*;
