mod error;

use error::{shift_spans, NonConstantPoint};
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};
use symdiff_compute::{
    numerical::{constant_value, Eval},
    symbolic::{derivative, simplify::step::Step, simplify_with_steps, ConstantMode, SimplifyOptions},
};
use symdiff_error::Error;
use symdiff_parser::{parse, parser::fmt::fmt_number};

const USAGE: &str = "\
usage: symdiff-repl [--exact] [--steps] [--tree] [--verbose | --trace] [EXPRESSION]

Differentiates and simplifies expressions in x. Without an expression, reads one expression per
line from stdin, or starts an interactive prompt. Append `@ <value>` to an expression to evaluate
it and its derivative at that value.

  --exact    fold constants as exact fractions
  --steps    print the simplification steps
  --tree     print the parsed expression as a tree
  --verbose  log each simplification pass
  --trace    log tokens and every rewrite";

/// Command-line options.
#[derive(Debug, Clone, PartialEq)]
struct Options {
    exact: bool,
    steps: bool,
    tree: bool,
    level: LevelFilter,
    expression: Option<String>,
}

impl Options {
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut options = Self {
            exact: false,
            steps: false,
            tree: false,
            level: LevelFilter::Warn,
            expression: None,
        };

        for arg in args {
            match arg.as_str() {
                "--exact" => options.exact = true,
                "--steps" => options.steps = true,
                "--tree" => options.tree = true,
                "--verbose" => options.level = options.level.max(LevelFilter::Debug),
                "--trace" => options.level = LevelFilter::Trace,
                flag if flag.starts_with("--") => return Err(format!("unknown flag `{}`", flag)),
                _ if options.expression.is_some() => {
                    return Err("only one expression can be given".to_string());
                },
                expression => options.expression = Some(expression.to_string()),
            }
        }

        Ok(options)
    }

    fn simplify_options(&self) -> SimplifyOptions {
        let mode = if self.exact { ConstantMode::Exact } else { ConstantMode::Float };
        SimplifyOptions::default().mode(mode)
    }
}

/// Parses the point after an `@`, which must be a constant expression. `offset` is the position
/// of `source` in the input.
fn parse_point(source: &str, offset: usize) -> Result<f64, Error> {
    let expr = parse(source).map_err(|err| shift_spans(err, offset))?;
    constant_value(&expr)
        .ok_or_else(|| Error::new(vec![offset..offset + source.len()], NonConstantPoint))
}

fn print_steps(steps: &[Step]) {
    for step in steps {
        println!("    {}", step);
    }
}

/// Differentiates and simplifies the input, printing the results.
fn process(input: &str, options: &Options) -> Result<(), Error> {
    let (source, point) = match input.split_once('@') {
        Some((source, point)) => (source, Some(parse_point(point, source.len() + 1)?)),
        None => (input, None),
    };

    let expr = parse(source)?;
    if options.tree {
        print!("{}", expr.as_tree());
    }

    let simplify_options = options.simplify_options();
    let (f, f_steps) = simplify_with_steps(&expr, &simplify_options)?;
    let (df, df_steps) = simplify_with_steps(&derivative(&expr), &simplify_options)?;

    println!("f(x) = {}", f);
    if options.steps {
        print_steps(&f_steps);
    }
    println!("f'(x) = {}", df);
    if options.steps {
        print_steps(&df_steps);
    }

    if let Some(x) = point {
        println!("f({}) = {}", fmt_number(x), fmt_number(expr.eval(x)));
        println!("f'({}) = {}", fmt_number(x), fmt_number(df.eval(x)));
    }

    Ok(())
}

/// Processes the input, reporting any error to stderr. Returns true if there was no error.
fn run(input: &str, options: &Options) -> bool {
    match process(input, options) {
        Ok(()) => true,
        Err(err) => {
            if err.report_to_stderr("input", input).is_err() {
                eprintln!("error: {}", err);
            }
            false
        },
    }
}

/// Processes each non-blank line of stdin.
fn run_lines(options: &Options) -> ExitCode {
    let mut success = true;
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        };

        if !line.trim().is_empty() {
            success &= run(&line, options);
        }
    }

    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Runs the interactive prompt until end of input.
fn repl(options: &Options) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    fn process_line(rl: &mut DefaultEditor, options: &Options) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        run(&input, options);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, options) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => ExitCode::SUCCESS,
                _ => {
                    eprintln!("{}", err);
                    ExitCode::FAILURE
                },
            };
        }
    }
}

fn main() -> ExitCode {
    let options = match Options::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n\n{}", message, USAGE);
            return ExitCode::FAILURE;
        },
    };

    if TermLogger::init(options.level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("could not initialize logging");
    }
    log::debug!("{:?}", options);

    if let Some(expression) = &options.expression {
        if run(expression, &options) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    } else if !io::stdin().is_terminal() {
        run_lines(&options)
    } else {
        repl(&options)
    }
}
