use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_calculator::interpreter::extractor::extract_expression;
use infix_calculator::interpreter::parser::{
    convert_infix_to_postfix, convert_infix_to_postfix_strict,
};
use infix_calculator::interpreter::{calculate, calculate_strict, format_value, tokens_to_string};
use log::info;
use std::io;
use std::io::BufRead;

/// Calculates the value of arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to calculate. Expressions are read line by line from standard input if left out
    expression: Option<String>,

    /// Print the expression in postfix notation instead of calculating it
    #[clap(long)]
    postfix: bool,

    /// Fail on mismatched parentheses instead of calculating what could be converted
    #[clap(long)]
    strict: bool,

    /// Look for the expression inside a piece of free text
    #[clap(long)]
    extract: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    match args.expression {
        Some(ref expression) => println!("{}", process(expression, &args)?),
        None => process_standard_input(&args)?,
    }
    Ok(())
}

fn process_standard_input(args: &Arguments) -> Result<()> {
    let mut failures = 0;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from standard input")?;
        if line.trim().is_empty() {
            continue;
        }
        match process(&line, args) {
            Ok(output) => println!("{}", output),
            Err(err) => {
                failures += 1;
                eprintln!("{:#}", err);
            }
        }
    }

    if failures > 0 {
        bail!("{} expression(s) could not be calculated", failures);
    }
    Ok(())
}

/// Calculates, or converts to postfix, a single line of input.
fn process(input: &str, args: &Arguments) -> Result<String> {
    let expression = if args.extract {
        let found = extract_expression(input)
            .with_context(|| format!("No arithmetic expression found in '{}'", input))?;
        info!("found expression '{}' in '{}'", found, input);
        found
    } else {
        input
    };

    if args.postfix {
        let tokens = if args.strict {
            convert_infix_to_postfix_strict(expression)
                .with_context(|| format!("Could not convert '{}' to postfix", expression))?
        } else {
            convert_infix_to_postfix(expression)
        };
        return Ok(tokens_to_string(&tokens));
    }

    let value = if args.strict {
        calculate_strict(expression)
    } else {
        calculate(expression)
    }
    .with_context(|| format!("Could not calculate '{}'", expression))?;
    Ok(format_value(value))
}
