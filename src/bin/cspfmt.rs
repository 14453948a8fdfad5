//! `cspfmt`: reformat CSP process notation source.
//!
//! Reads CSP source from a file or stdin, runs the full lex/parse/
//! validate/format pipeline, and prints either the reformatted CSP text
//! or (with `--structural`) a Lisp-style structural dump. On failure,
//! prints the three-line diagnostic citation to stderr and exits 1
//! (SPEC_FULL.md §6 "CLI surface").
//!
//! This binary is ambient tooling: it owns argument parsing and I/O. The
//! `cspsh` library itself never touches `std::fs` or `std::env`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Parser)]
#[command(name = "cspfmt", about = "Reformat CSP process notation source")]
struct Args {
    /// Print the Lisp-style structural dump instead of canonical CSP text.
    #[arg(long)]
    structural: bool,

    /// Input file; reads stdin when omitted.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let text = match read_input(args.file.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let (source_map, tokens) = cspsh::lex(&text);

    let ast = match cspsh::parse(&tokens) {
        Ok(ast) => ast,
        Err(err) => return report(&source_map, &tokens, err),
    };
    if let Err(err) = cspsh::validate(&ast) {
        return report(&source_map, &tokens, err);
    }

    let wrap_width = terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(cspsh::formatter::STRUCTURAL_WRAP_WIDTH);

    let out = if args.structural {
        cspsh::formatter::format_structural_with_width(&ast, wrap_width)
    } else {
        cspsh::format_csp(&ast)
    };
    println!("{out}");
    ExitCode::SUCCESS
}

fn read_input(file: Option<&std::path::Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn report(source_map: &cspsh::SourceMap, tokens: &[cspsh::Token], err: cspsh::CspError) -> ExitCode {
    let citation = cspsh::cite(source_map, tokens, &err);
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);

    for line in citation.lines() {
        if let Some(hint) = line.strip_prefix("error: ") {
            let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(stderr, "error: ");
            let _ = stderr.reset();
            let _ = writeln!(stderr, "{hint}");
        } else {
            let _ = writeln!(stderr, "{line}");
        }
    }
    ExitCode::FAILURE
}
