use crate::output::{Entry, Output};
use std::fmt;
use std::io::Write;

/// Hex listing: `xx ` per byte, markers on their own line.
impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries() {
            match entry {
                Entry::Byte(value) => write!(f, "{:02x} ", value)?,
                Entry::Marker(seg, origin) => write!(f, "\n{} {:02x}\n", seg.keyword(), origin)?,
            }
        }
        Ok(())
    }
}

pub fn emit<W: Write>(out: &Output, w: &mut W) -> std::io::Result<()> {
    write!(w, "{}", out)?;
    w.flush()
}
