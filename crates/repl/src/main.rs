mod cli;
mod session;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let session = Session::new(cli.eval_options(), !cli.untyped);

    if let Some(expr) = &cli.expr {
        return report(session.run_program(&terminated(expr)));
    }
    if let Some(path) = &cli.file {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        };
        return report(session.run_program(&source));
    }

    match repl(session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// `-e 1 + 1` reads naturally without the terminator.
fn terminated(expr: &str) -> String {
    let trimmed = expr.trim_end();
    if trimmed.ends_with(';') {
        trimmed.to_string()
    } else {
        format!("{trimmed};")
    }
}

fn report(result: session::ReplResult<Vec<String>>) -> ExitCode {
    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn repl(mut session: Session) -> Result<(), ReadlineError> {
    println!("lampy v{}", env!("CARGO_PKG_VERSION"));
    println!("Type terms to evaluate them, or :quit to exit");
    println!();

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline("- ");
        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                if line == ":quit" || line == ":q" {
                    break;
                }
                if line == ":help" || line == ":h" {
                    print_help();
                    continue;
                }
                if line == ":untyped" {
                    session.typed = !session.typed;
                    let mode = if session.typed { "off" } else { "on" };
                    println!("untyped mode {mode}");
                    continue;
                }
                if let Some(rest) = line.strip_prefix(":type") {
                    match session.type_of(rest) {
                        Ok(ty) => println!("val it : {ty}"),
                        Err(error) => println!("{error}"),
                    }
                    continue;
                }
                if line.starts_with(':') {
                    println!("Unknown command {line}, try :help");
                    continue;
                }

                match session.run_line(line) {
                    Ok(out) => println!("{out}"),
                    Err(error) => println!("{error}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  :help, :h      - Show this help message");
    println!("  :quit, :q      - Exit the REPL");
    println!("  :type <term>   - Show the inferred type of a term");
    println!("  :untyped       - Toggle evaluation without type inference");
    println!();
    println!("Examples:");
    println!("  ((a: int) => 1 + a) 2");
    println!("  (f: int -> int, x: int) => f (f x)");
    println!("  let sq = (n: int) => n * n in sq 7");
    println!("  \"foo\" + \"bar\"");
}
