use crate::error::Error;
use crate::parser::Unit;

/// Second pass: patches every forward reference with its final value.
pub fn resolve(unit: &mut Unit) -> Result<(), Error> {
    for usage in std::mem::take(&mut unit.unresolved) {
        match unit.symbols.reference(&usage.name) {
            Some(value) => unit.out.patch(usage.offset, value),
            None => return Err(Error::UndefinedSymbol(usage.line, usage.name)),
        }
    }
    Ok(())
}
