use crate::output::{Entry, Segment};
use crate::parser::Unit;
use crate::symbol::SymbolKind;
use color_print::{cformat, cprintln};

enum Row {
    Segment(Segment, u8),
    Code { line: usize, addr: u16, bytes: Vec<u8> },
}

fn rows(unit: &Unit) -> Vec<Row> {
    let mut rows = vec![];
    let mut addr: u16 = 0;
    for (entry, line) in unit.out.iter() {
        match *entry {
            Entry::Marker(seg, origin) => {
                rows.push(Row::Segment(seg, origin));
                addr = origin.into();
            }
            Entry::Byte(b) => {
                addr += 1;
                if let Some(Row::Code { line: l, bytes, .. }) = rows.last_mut() {
                    if *l == line {
                        bytes.push(b);
                        continue;
                    }
                }
                rows.push(Row::Code {
                    line,
                    addr: addr - 1,
                    bytes: vec![b],
                });
            }
        }
    }
    rows
}

pub fn print_dump(path: &str, src: &str, unit: &Unit) {
    let lines: Vec<&str> = src.lines().collect();

    println!(
        "{}+------[{}]{}",
        "-".repeat(19),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );
    for row in rows(unit) {
        match row {
            Row::Segment(seg, origin) => {
                cprintln!("{:19}| <m>{} 0x{:02X}</>", "", seg.keyword(), origin);
            }
            Row::Code { line, addr, bytes } => {
                let bin = bytes
                    .iter()
                    .map(|b| format!("{:02X}", b))
                    .collect::<Vec<_>>()
                    .join(" ");
                let raw = lines.get(line.saturating_sub(1)).copied().unwrap_or("");
                println!("[{:02X}] {:<13}| {:>4}: {}", addr, bin, line, raw.trim());
            }
        }
    }

    println!("+-[Symbols]--------+-----------------------------------------------------");
    for sym in unit.symbols.iter() {
        let name = match sym.kind {
            SymbolKind::Label => cformat!("<g>{}</>", sym.name),
            SymbolKind::Const => cformat!("<y>{}</>", sym.name),
        };
        println!("| 0x{:02X} : {:<11}| {:>4}: {}", sym.value, kind(sym.kind), sym.line, name);
    }
    println!("-------------------+-----------------------------------------------------");
}

fn kind(kind: SymbolKind) -> &'static str {
    match kind {
        SymbolKind::Label => "label",
        SymbolKind::Const => "const",
    }
}
