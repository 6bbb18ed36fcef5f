use clap::Parser;
use miette::{IntoDiagnostic, Result};
use polcalc_core::{evaluate, node_count, parse};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io::BufRead;
use std::io::BufReader;

/// polcalc - a calculator for parenthesized-prefix arithmetic
#[derive(Parser, Debug)]
#[command(name = "polcalc")]
#[command(version)]
#[command(about = "Evaluate parenthesized-prefix arithmetic, e.g. `+ 1 (* 2 3)`", long_about = None)]
struct Args {
    /// Print the parsed grammar tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

/// Parse and evaluate one line, printing the outcome.
///
/// Results and evaluation errors go to stdout; parse diagnostics go to
/// stderr. The parse tree lives only for the duration of this call.
fn interpret_line(input: &str, debug_parse: bool) {
    let input = input.trim();
    if input.is_empty() {
        return;
    }
    tracing::debug!(len = input.len(), "interpreting line");

    let program = match parse(input) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    if debug_parse {
        println!("=== Grammar tree ({} nodes) ===", node_count(&program));
        println!("{program:#?}");
        println!();
    }

    match evaluate(program) {
        Ok(n) => println!("{n}"),
        Err(e) => println!("Error: {e}"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber.
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the log level; default to WARN if not set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Direct expression argument: evaluate once and exit.
    if let Some(expr) = args.expression {
        interpret_line(&expr, args.debug_parse);
        return Ok(());
    }

    if atty::is(atty::Stream::Stdin) {
        // Interactive REPL mode. Reedline keeps in-memory history for the
        // session; each line buffer is scoped to one loop iteration.
        let mut line_editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("polcalc".to_string()),
            DefaultPromptSegment::Empty,
        );

        println!("polcalc {}", env!("CARGO_PKG_VERSION"));
        println!("Press Ctrl+D or Ctrl+C to exit\n");

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;

            match sig {
                Signal::Success(buffer) => {
                    interpret_line(&buffer, args.debug_parse);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode: one expression per line.
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            interpret_line(&line, args.debug_parse);
        }

        Ok(())
    }
}
