use std::io::Write;

use quill_core::{
	environment::prelude::Environment,
	eval::prelude::eval,
	parser::prelude::parse_module
};

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

	// one global scope for the whole session, bindings survive between lines
	let env = Environment::global();

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;

		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			".exit" => return Ok(()),
			_ => {
				match parse_module(&input) {
					Ok(program) => match eval(&program, env.clone()) {
						Ok(value) => println!("{}", value),
						Err(err) => {
							let (message, messages) = err.details();

							println!("Runtime error: {}.\n\t{}", message, messages.join(";\n\t"))
						}
					},
					Err(err) => {
						let (message, messages) = err.details();

						println!("Parse error: {}.\n\t{}", message, messages.join(";\n\t"))
					}
				}
			}
		}
	}
}
