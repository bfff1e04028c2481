pub mod directive;
pub mod mode;
pub mod op;
pub mod reg;

pub use directive::Directive;
pub use mode::AddrMode;
pub use op::{Desc, Op, Shape};
pub use reg::Reg;
