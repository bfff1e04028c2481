use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Label,
    Const,
}

#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub value: u8,
    pub kind: SymbolKind,
    pub line: usize,
    pub used: bool,
}

/// Resolved symbols: labels and `.define` constants. Names match ignoring case.
#[derive(Debug, Default)]
pub struct SymbolTable(IndexMap<String, Symbol>);

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable(IndexMap::new())
    }

    /// Binds `name`. An existing binding is kept as it is.
    pub fn define(&mut self, name: String, value: u8, kind: SymbolKind, line: usize) {
        self.0.entry(name.to_ascii_lowercase()).or_insert(Symbol {
            name,
            value,
            kind,
            line,
            used: false,
        });
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(&name.to_ascii_lowercase())
    }

    pub fn get_val(&self, name: &str) -> Option<u8> {
        self.get(name).map(|sym| sym.value)
    }

    /// Looks up `name` as an operand and marks it referenced.
    pub fn reference(&mut self, name: &str) -> Option<u8> {
        self.0.get_mut(&name.to_ascii_lowercase()).map(|sym| {
            sym.used = true;
            sym.value
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.0.values()
    }

    pub fn unused(&self) -> impl Iterator<Item = &Symbol> {
        self.iter().filter(|sym| !sym.used)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A forward reference waiting for its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    pub name: String,
    /// Index of the placeholder byte in the output buffer
    pub offset: usize,
    pub line: usize,
}
