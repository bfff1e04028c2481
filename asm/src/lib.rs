pub mod emit;
pub mod error;
pub mod lexer;
pub mod msg;
pub mod output;
pub mod parser;
pub mod resolve;
pub mod symbol;
pub mod token;
pub mod util;

pub use emit::emit;
pub use error::Error;
pub use lexer::Lexer;
pub use msg::Msg;
pub use output::{Entry, Output, Segment};
pub use parser::{Assembler, Unit};
pub use resolve::resolve;
pub use symbol::{Symbol, SymbolKind, SymbolTable, Usage};
pub use token::Token;
pub use util::print_dump;

/// Runs both passes over `src`.
pub fn assemble(src: &str) -> Result<Unit, Error> {
    let mut unit = Assembler::new(src).run()?;
    resolve(&mut unit)?;
    Ok(unit)
}
