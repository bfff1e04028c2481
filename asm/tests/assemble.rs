use arch::{AddrMode, Op, Reg, Shape};
use educpuasm::{assemble, resolve, Assembler, Error, SymbolKind};
use strum::IntoEnumIterator;

fn listing(src: &str) -> String {
    assemble(src).unwrap().out.to_string()
}

fn error(src: &str) -> Error {
    assemble(src).unwrap_err()
}

// ----------------------------------------------------------------------------
// Encoding

const FORMS: [(&str, AddrMode); 7] = [
    ("acc", AddrMode::Acc),
    ("ix", AddrMode::Ix),
    ("5", AddrMode::Imm),
    ("[5]", AddrMode::Abs),
    ("(5)", AddrMode::AbsStore),
    ("[ix+5]", AddrMode::Idx),
    ("(ix+5)", AddrMode::IdxStore),
];

#[test]
fn opcode_byte_formula() {
    for op in Op::iter() {
        let desc = op.desc();
        let mut cases: Vec<(String, Option<Reg>, Option<AddrMode>)> = vec![];
        match desc.shape {
            Shape::Implied => cases.push((format!("{op}"), None, None)),
            Shape::RegOnly => {
                for reg in [Reg::ACC, Reg::IX] {
                    cases.push((format!("{op} {reg}"), Some(reg), None));
                }
            }
            Shape::Branch => cases.push((format!("{op} 5"), None, Some(AddrMode::Imm))),
            Shape::Alu | Shape::Store => {
                for reg in [Reg::ACC, Reg::IX] {
                    for (b, mode) in FORMS.iter().filter(|(_, mode)| desc.accepts(*mode)) {
                        let code = if desc.swapped() {
                            format!("{op} {b}, {reg}")
                        } else {
                            format!("{op} {reg}, {b}")
                        };
                        cases.push((code, Some(reg), Some(*mode)));
                    }
                }
            }
        }
        for (code, a, b) in cases {
            let bytes = assemble(&code).unwrap().out.bytes();
            let expect = desc.base
                + a.map_or(0, |reg| 8 * reg.id())
                + b.map_or(0, |mode| mode.offset());
            assert_eq!(bytes[0], expect, "{code}");
            let len = if b.is_some_and(AddrMode::has_byte) { 2 } else { 1 };
            assert_eq!(bytes.len(), len, "{code}");
        }
    }
}

#[test]
fn store_example() {
    let src = "\
.text 0x00
start: ld acc, 5
       st (loop), acc
loop:  nop
";
    let unit = assemble(src).unwrap();
    assert_eq!(unit.symbols.get_val("loop"), Some(0x04));
    assert_eq!(unit.symbols.get_val("start"), Some(0x00));
    assert_eq!(unit.out.to_string(), "\n.text 00\n62 05 75 04 00 ");
}

#[test]
fn paren_operand_requires_index_register() {
    // `(acc)` is not an addressing form: only IX may appear inside parens.
    let src = ".text 0x00\nstart: ld acc, 5\n       st (acc), loop\nloop:  nop\n";
    assert!(matches!(error(src), Error::IndexRegisterOnly(3)));
}

#[test]
fn mnemonic_and_register_case() {
    assert_eq!(listing("LD IX, [IX+0x10]\nHalt"), "6e 10 0f ");
}

// ----------------------------------------------------------------------------
// Symbols

#[test]
fn forward_and_backward_reference_agree() {
    let forward = assemble("ba target\nnop\ntarget: nop").unwrap();
    let backward = assemble("nop\nnop\ntarget: nop\nba target").unwrap();
    assert_eq!(forward.out.bytes()[1], 0x03);
    assert_eq!(backward.out.bytes()[4], 0x02);
    assert_eq!(forward.symbols.get_val("target"), Some(0x03));
    assert_eq!(backward.symbols.get_val("target"), Some(0x02));
}

#[test]
fn all_operand_b_forms_take_forward_references() {
    let src = "ld acc, x\nld acc, [x]\nld acc, (x)\nld acc, [ix+x]\nst (ix+x), ix\n.define x 0x33";
    assert_eq!(listing(src), "62 33 64 33 65 33 66 33 7f 33 ");
}

#[test]
fn define_constant() {
    let unit = assemble(".define LIMIT 0x20\ncmp acc, limit").unwrap();
    assert_eq!(unit.out.bytes(), vec![0xf2, 0x20]);
    let sym = unit.symbols.get("limit").unwrap();
    assert_eq!(sym.kind, SymbolKind::Const);
    assert_eq!(sym.name, "LIMIT");
    assert!(sym.used);
}

#[test]
fn symbols_ignore_case() {
    assert_eq!(listing("Loop: ba LOOP\nbz later\nLATER:"), "30 00 39 04 ");
}

#[test]
fn unused_symbols() {
    let unit = assemble("start: nop\nloop: ba loop\n.define K 1").unwrap();
    let unused: Vec<_> = unit.symbols.unused().map(|sym| sym.name.as_str()).collect();
    assert_eq!(unused, vec!["start", "K"]);
}

#[test]
fn resolver_is_noop_without_forward_references() {
    let src = ".define k 9\n.text 0x40\nhere: ld acc, k\nadd acc, [here]\n.byte 1 2";
    let mut unit = Assembler::new(src).run().unwrap();
    assert!(unit.unresolved.is_empty());
    let before = unit.out.to_string();
    resolve(&mut unit).unwrap();
    assert_eq!(unit.out.to_string(), before);
    assert_eq!(before, "\n.text 40\n62 09 b4 40 01 02 ");
}

#[test]
fn undefined_symbol() {
    match error("nop\nld acc, [missing]\nnop") {
        Error::UndefinedSymbol(line, name) => {
            assert_eq!(line, 2);
            assert_eq!(name, "missing");
        }
        err => panic!("unexpected: {err}"),
    }
}

// ----------------------------------------------------------------------------
// Directives

#[test]
fn segments_reset_address() {
    let src = ".text 0x10\na: nop\n.data 0x80\nb: .byte 1 2 3\nc:\n.text 0x11\nd: hlt";
    let unit = assemble(src).unwrap();
    assert_eq!(unit.symbols.get_val("a"), Some(0x10));
    assert_eq!(unit.symbols.get_val("b"), Some(0x80));
    assert_eq!(unit.symbols.get_val("c"), Some(0x83));
    assert_eq!(unit.symbols.get_val("d"), Some(0x11));
    assert_eq!(
        unit.out.to_string(),
        "\n.text 10\n00 \n.data 80\n01 02 03 \n.text 11\n0f "
    );
}

#[test]
fn byte_run() {
    let unit = assemble(".text 0x20\n.byte 1 2 3\nafter:").unwrap();
    assert_eq!(unit.out.bytes(), vec![1, 2, 3]);
    assert_eq!(unit.symbols.get_val("after"), Some(0x23));
    assert_eq!(listing(".byte\nnop"), "00 ");
}

#[test]
fn byte_run_ends_at_non_number() {
    assert!(matches!(error(".byte 1 2 ,"), Error::TrailingToken(1)));
    assert!(matches!(error(".byte 1 later"), Error::TrailingToken(1)));
}

#[test]
fn comments_and_blank_lines() {
    let src = "; header\n\n  nop ; trailing\n\t; indented\nhlt";
    assert_eq!(listing(src), "00 0f ");
}

// ----------------------------------------------------------------------------
// Errors

macro_rules! case {
    ($name:ident, $code:expr, $expect:pat) => {
        #[test]
        fn $name() {
            let err = error($code);
            assert!(matches!(err, $expect), "{}", err);
        }
    };
}

case!(missing_operand_a, "ld 5, acc", Error::ExpectedOperandA(1));
case!(missing_operand_b, "nop\nadd acc, ,", Error::ExpectedOperandB(2));
case!(missing_comma, "ld acc 5", Error::ExpectedComma(1));
case!(missing_comma_at_eol, "nop ; c\nld acc\n", Error::ExpectedComma(3));
case!(trailing_token, "nop nop", Error::TrailingToken(1));
case!(trailing_after_operand, "ld acc, 5 6", Error::TrailingToken(1));
case!(unclosed_bracket, "ld acc, [5)", Error::Syntax(1));
case!(empty_bracket, "ld acc, []", Error::Syntax(1));
case!(index_without_plus, "ld acc, [ix 5]", Error::Syntax(1));
case!(index_without_value, "ld acc, [ix+]", Error::Syntax(1));
case!(index_wrong_register, "ld acc, [acc+5]", Error::IndexRegisterOnly(1));
case!(branch_to_register, "ba acc", Error::BadOperandB(1));
case!(store_immediate, "st 5, acc", Error::BadOperandB(1));
case!(label_without_colon, "start nop", Error::ExpectedColon(1, _));
case!(label_redefined, "a:\na:", Error::InvalidStatement(2));
case!(define_redefined, ".define k 1\n.define k 2", Error::Redefinition(2));
case!(define_without_value, ".define k acc", Error::ExpectedNumber(1));
case!(define_without_name, ".define acc 1", Error::Syntax(1));
case!(text_without_origin, ".text start", Error::ExpectedAddress(1));
case!(statement_starts_with_number, "5", Error::InvalidStatement(1));
case!(statement_starts_with_comma, ", nop", Error::InvalidStatement(1));
case!(literal_too_big, "ld acc, 256", Error::NumberTooBig(1, _));
case!(hex_literal_too_big, ".byte 0x100", Error::NumberTooBig(1, _));
case!(unknown_directive, "nop\n.org 4", Error::UnknownDirective(2, _));
case!(past_address_space, ".text 0xff\n.byte 1 2", Error::AddressOverflow(2));
