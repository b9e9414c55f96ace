use std::{
    fs,
    io::{self, Read, Write},
    process,
};

use clap::Parser;
use opslang::interpreter::{lexer::Lexer, machine::Machine, parser};

/// opslang compiles a small imperative language to a postfix instruction
/// stream and interprets it on a stack machine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a source file. When omitted, the driver asks for a path or
    /// for the word 'manual' to read the program from standard input.
    source: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let source = match &args.source {
        Some(path) => read_source_file(path),
        None => prompt_for_source()?,
    };
    pipeline(&source)
}

/// Asks for a source file path on standard input; the word `manual` reads
/// the program text itself from standard input until end-of-input.
fn prompt_for_source() -> Result<String, Box<dyn std::error::Error>> {
    print!("Source file path (or 'manual'): ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().read_line(&mut choice)?;
    let choice = choice.trim();

    if choice == "manual" {
        println!("Enter your program, then finish with end-of-input (Ctrl+D).");
        let mut code = String::new();
        io::stdin().read_to_string(&mut code)?;
        return Ok(code);
    }
    if choice.is_empty() {
        return Err("No source file given.".into());
    }
    Ok(read_source_file(choice))
}

fn read_source_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| {
                                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                process::exit(1);
                            })
}

/// Runs the three stages over `source`, printing the token listing, the
/// postfix listing, and the symbol-table dump in between.
fn pipeline(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (tokens, diagnostics) = Lexer::tokenize(source);

    println!("--- Tokens ---");
    for token in &tokens {
        println!("  {} : \"{}\" (line {})", token.kind, token.lexeme, token.line);
    }
    println!("--- End of tokens ---");
    println!();

    if !diagnostics.is_empty() {
        for diagnostic in &diagnostics {
            eprintln!("{diagnostic}");
        }
        return Err(format!("Scanning produced {} diagnostic(s).", diagnostics.len()).into());
    }

    // A source with no tokens besides the sentinel has nothing to parse.
    if tokens.len() == 1 {
        println!("Nothing to parse.");
        return Ok(());
    }

    let program = parser::Parser::new(tokens).parse()?;

    println!("--- Postfix ---");
    if program.instructions.is_empty() {
        println!("  (empty)");
    }
    for (index, instruction) in program.instructions.iter().enumerate() {
        println!("  {index}: line {}: {instruction}", instruction.line);
    }
    println!("--- End of postfix ---");
    println!();

    println!("--- Symbol table ---");
    if program.symbols.is_empty() {
        println!("  (empty)");
    }
    for (name, symbol) in program.symbols.iter() {
        println!("  '{name}': class={}, size={}, declared at line {}",
                 symbol.class, symbol.size, symbol.declaration_line);
    }
    println!("--- End of symbol table ---");
    println!();

    println!("--- Running ---");
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut machine = Machine::new(&program, stdin, stdout)?.with_prompt(true);
    machine.run()?;
    println!("--- Done ---");

    Ok(())
}
