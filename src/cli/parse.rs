//! Parse command implementation.
//!
//! Infers the annotation for one description, given as an argument or on
//! stdin, and prints it to stdout. Text no rule recognizes produces no
//! stdout output, only a note on stderr.

use std::io::Read;

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::parser::parse_type;

/// Infer the annotation for a single description
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Description text (reads stdin when omitted)
    pub text: Option<String>,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    match parse_type(&text) {
        Some(annotation) => println!("{}", annotation),
        None => {
            let printer = Printer::new();
            printer.warning("Unresolved", "no annotation for the given description");
        }
    }

    Ok(())
}
