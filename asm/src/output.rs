use arch::Directive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Text,
    Data,
}

impl Segment {
    pub fn keyword(&self) -> &'static str {
        Directive::from(*self).keyword()
    }
}

impl From<Segment> for Directive {
    fn from(seg: Segment) -> Directive {
        match seg {
            Segment::Text => Directive::Text,
            Segment::Data => Directive::Data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Byte(u8),
    Marker(Segment, u8),
}

/// Append-only output buffer. Each entry remembers the source line that produced it.
#[derive(Debug, Default)]
pub struct Output {
    entries: Vec<Entry>,
    lines: Vec<usize>,
}

impl Output {
    pub fn new() -> Self {
        Output::default()
    }

    pub fn push(&mut self, entry: Entry, line: usize) {
        self.entries.push(entry);
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Entry, usize)> {
        self.entries.iter().zip(self.lines.iter().copied())
    }

    /// Data bytes only, markers skipped.
    pub fn bytes(&self) -> Vec<u8> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Byte(b) => Some(*b),
                Entry::Marker(..) => None,
            })
            .collect()
    }

    /// Overwrites a placeholder byte.
    pub fn patch(&mut self, offset: usize, value: u8) {
        match self.entries.get_mut(offset) {
            Some(Entry::Byte(b)) => *b = value,
            other => unreachable!("offset {} is not a data byte: {:?}", offset, other),
        }
    }
}
