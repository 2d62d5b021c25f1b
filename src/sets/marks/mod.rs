mod bit_marks;
mod mark_set;

pub use bit_marks::*;
pub use mark_set::*;
