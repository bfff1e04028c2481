use bimap::BiMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Directive {
    Text,
    Data,
    Define,
    Byte,
}

static DIRECTIVE_MAP: Lazy<BiMap<&'static str, Directive>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, Directive> = BiMap::new();
    map.insert(".text", Directive::Text);
    map.insert(".data", Directive::Data);
    map.insert(".define", Directive::Define);
    map.insert(".byte", Directive::Byte);
    map
});

impl Directive {
    /// Looks up a directive by its keyword, dot included. Case is ignored.
    pub fn parse(s: &str) -> Result<Directive, String> {
        match DIRECTIVE_MAP.get_by_left(s.to_ascii_lowercase().as_str()) {
            Some(directive) => Ok(*directive),
            None => Err(format!("Unknown directive: `{}`", s)),
        }
    }

    pub fn keyword(&self) -> &'static str {
        DIRECTIVE_MAP.get_by_right(self).copied().unwrap_or_default()
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[test]
fn test() {
    assert_eq!(Directive::parse(".text"), Ok(Directive::Text));
    assert_eq!(Directive::parse(".DATA"), Ok(Directive::Data));
    assert_eq!(Directive::parse(".Define"), Ok(Directive::Define));
    assert!(Directive::parse(".org").is_err());
    assert!(Directive::parse("text").is_err());
    assert_eq!(Directive::Byte.keyword(), ".byte");
    assert_eq!(Directive::Data.to_string(), ".data");
}
