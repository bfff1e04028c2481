use educpuasm::{Error, Msg};
use std::io::Read;
use std::process::exit;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input source file
    input: String,

    /// Output listing file
    output: String,

    /// Dump assembled code and symbols
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("EDUCPU Assembler");

    println!("1. Read Source");
    println!("  < {}", &args.input);
    let src = match read_source(&args.input) {
        Ok(src) => src,
        Err(err) => {
            err.print_diag(&args.input, "");
            exit(1);
        }
    };

    println!("2. Assemble");
    let unit = match educpuasm::assemble(&src) {
        Ok(unit) => unit,
        Err(err) => {
            err.print_diag(&args.input, &src);
            exit(1);
        }
    };
    for sym in unit.symbols.unused() {
        let raw = src.lines().nth(sym.line.saturating_sub(1)).unwrap_or("");
        Msg::Warn(format!("Unused symbol: `{}`", sym.name)).print((&args.input, sym.line, raw));
    }

    println!("3. Write Listing");
    println!("  > {}", &args.output);
    if let Err(err) = write_listing(&args.output, &unit) {
        err.print_diag(&args.output, "");
        exit(1);
    }

    if args.dump {
        educpuasm::print_dump(&args.input, &src, &unit);
    }
}

fn read_source(path: &str) -> Result<String, Error> {
    let mut file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    let mut src = String::new();
    file.read_to_string(&mut src)
        .map_err(|e| Error::FileRead(path.to_string(), e))?;
    Ok(src)
}

fn write_listing(path: &str, unit: &educpuasm::Unit) -> Result<(), Error> {
    let file = std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    let mut w = std::io::BufWriter::new(file);
    educpuasm::emit(&unit.out, &mut w).map_err(|e| Error::FileWrite(path.to_string(), e))
}
