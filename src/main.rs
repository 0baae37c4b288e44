mod debug_report;

use clap::Parser;
use larder::{Options, ParseResult, try_parse_verbose_with, try_parse_with};
use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(name = "larder", version)]
#[clap(about = "Parse recipe ingredient lines into quantities, units and ingredient text")]
struct Args {
    /// Ingredient line to parse. Words are joined with spaces. Reads stdin,
    /// one line at a time, when omitted.
    input: Vec<String>,

    /// Print one JSON object per line
    #[clap(long, conflicts_with = "verbose")]
    json: bool,

    /// Print the parse tree and timings
    #[clap(short, long)]
    verbose: bool,

    /// Force ANSI color output
    #[clap(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output
    #[clap(long, overrides_with = "color")]
    no_color: bool,

    /// Inputs longer than this many bytes are not parsed
    #[clap(long, default_value_t = Options::default().max_input_len)]
    max_input_len: usize,

    /// Maximum nesting of grammar rules
    #[clap(long, default_value_t = Options::default().max_depth)]
    max_depth: usize,
}

impl Args {
    fn color(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            io::stdout().is_terminal()
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let options = Options { max_input_len: args.max_input_len, max_depth: args.max_depth };

    let lines = match read_lines(&args.input) {
        Ok(lines) if !lines.is_empty() => lines,
        Ok(_) => {
            eprintln!("error: no input provided\n\nUsage: larder [OPTIONS] [INPUT]...");
            return ExitCode::from(2);
        }
        Err(err) => {
            eprintln!("error: failed to read stdin: {err}");
            return ExitCode::from(2);
        }
    };

    for line in &lines {
        if args.verbose {
            match try_parse_verbose_with(line, &options) {
                Ok(run) => debug_report::print_run(line, &run, args.color()),
                Err(err) => {
                    eprintln!("error: {line:?}: {err}");
                    return ExitCode::from(1);
                }
            }
            continue;
        }

        let result = match try_parse_with(line, &options) {
            Ok(result) => result,
            Err(err) => {
                eprintln!("error: {line:?}: {err}");
                return ExitCode::from(1);
            }
        };

        if args.json {
            match serde_json::to_string(&result) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: failed to encode result: {err}");
                    return ExitCode::from(1);
                }
            }
        } else {
            println!("{}", plain(&result));
        }
    }

    ExitCode::SUCCESS
}

/// Arguments joined into one line, or every non-blank stdin line.
fn read_lines(input: &[String]) -> io::Result<Vec<String>> {
    if !input.is_empty() {
        let line = input.join(" ");
        return Ok(if line.trim().is_empty() { Vec::new() } else { vec![line] });
    }

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn plain(result: &ParseResult) -> String {
    let quantity: Vec<String> = result
        .quantity
        .iter()
        .map(|q| match &q.unit {
            Some(unit) => format!("{} {}", q.amount, unit),
            None => q.amount.to_string(),
        })
        .collect();

    if quantity.is_empty() {
        format!("- | {}", result.ingredient)
    } else {
        format!("{} | {}", quantity.join(" + "), result.ingredient)
    }
}
