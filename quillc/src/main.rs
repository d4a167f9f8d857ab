mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use clap::Parser;
use cli::{print_finished, print_running};
use quill_core::{
    eval::prelude::run_from_stream,
    parser::prelude::parse_module,
    utils::prelude::Error
};

#[derive(Parser)]
enum Command {
    /// Parses and evaluates a source file
    Run {
        /// Path of source file
        path: PathBuf,
        /// Do not print the resulting value
        #[arg(short, long, default_value_t = false)]
        no_output: bool,
        /// Print ast instead of evaluating
        #[arg(long, default_value_t = false)]
        print_ast: bool
    },
    /// Runs Read Eval Print Loop
    Repl,
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl
}

fn main() {
    let _ = match Command::parse() {
        Command::Run { path, no_output, print_ast } => {
            let buf_writer = crate::cli::stderr_buffer_writer();
            let mut buf = buf_writer.buffer();

            print_running(path.to_str().unwrap_or_default());
            let start = std::time::Instant::now();

            let result = if print_ast {
                dump_ast(path)
            } else {
                run_from_stream(path).map(|value| {
                    if !no_output {
                        println!("{value}");
                    }
                })
            };

            if let Err(err) = result {
                err.pretty(&mut buf);
                buf_writer
                    .print(&buf)
                    .expect("Writing error to stderr");
            }

            print_finished(std::time::Instant::now() - start);
        },
        Command::Repl => {
            let _ = repl::start();
        },
        Command::Rlpl => {
            let _ = rlpl::start();
        },
        Command::Rppl => {
            let _ = rppl::start();
        }
    };
}

fn dump_ast(path: PathBuf) -> Result<(), Error> {
    let src = std::fs::read_to_string(&path)
        .map_err(|err| Error::StdIo { err: err.kind() })?;

    match parse_module(&src) {
        Ok(program) => {
            println!("{program:#?}");
            Ok(())
        },
        Err(error) => Err(Error::Parse { path, src, error })
    }
}
