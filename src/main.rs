use std::{
    env,
    fs::read_to_string,
    io::{self, Write},
    process,
    time::Instant,
};

use rparse::{
    errors::errors::Error,
    lexer::{
        lexer::{tokenize, tokenize_multiline},
        tokens::display_tokens,
    },
    parser::parser::parse,
};

const NAME: &str = "rparse";
const VERSION: &str = env!("CARGO_PKG_VERSION");
const STDIN_NAME: &str = "«stdin»";

struct Options {
    file_path: Option<String>,
    debug: bool,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args);

    if let Some(file_path) = options.file_path {
        let file_contents = match read_to_string(&file_path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("Failed to read {}: {}", file_path, err);
                process::exit(1);
            }
        };

        if let Err(error) = run(&file_contents, options.debug, true) {
            display_error(&error, &file_path);
            process::exit(1);
        }
        return;
    }

    println!("Enabling interactive mode, re-run with 'help' as a parameter for help.\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read input: {}", err);
                process::exit(1);
            }
        }

        let input = input.trim_end_matches(['\r', '\n']);
        if let Err(error) = run(input, options.debug, false) {
            display_error(&error, STDIN_NAME);
        }
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        file_path: None,
        debug: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "exec" => match iter.next() {
                Some(path) => options.file_path = Some(path.clone()),
                None => {
                    eprintln!("'exec' expects a file path as the next argument.");
                    process::exit(1);
                }
            },
            "debug" => options.debug = true,
            "help" => {
                print_help();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument '{}', run with 'help' for usage.", other);
                process::exit(1);
            }
        }
    }

    options
}

fn print_help() {
    println!("{} v{} --- Help", NAME, VERSION);
    println!("If no 'exec' argument is given, interactive mode is enabled.\n");
    println!("Commands:");
    println!("  exec  ---------- Parses a file given a filepath as the next argument.");
    println!("  debug ---------- Prints the tokens and syntax tree of each input.");
}

/// Files may span several lines; interactive input is a single line.
fn run(source: &str, debug: bool, multiline: bool) -> Result<(), Error> {
    let start = Instant::now();

    let tokens = if multiline {
        tokenize_multiline(source)?
    } else {
        tokenize(source)?
    };
    println!("Tokenized in {:?}", start.elapsed());
    if debug {
        println!("-> DEBUG: {}", display_tokens(&tokens));
    }

    let parse_start = Instant::now();
    let ast = parse(tokens)?;
    println!("Parsed in {:?}", parse_start.elapsed());
    if debug {
        println!("-> DEBUG: {}", ast);
    }

    println!("Finished successfully in {:?}", start.elapsed());
    Ok(())
}

fn display_error(error: &Error, file: &str) {
    /*
        Error: IllegalCharacter
        -> Unsupported character '&'
        -> «stdin»
          |
        1 | 1 & 2
          | --^
    */

    let position = error.get_position();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    println!("Error: {}", error.get_error_name());
    println!("-> {}", error.message());
    println!("-> {}", file);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&position.source_line);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.chars().count() - trimmed.chars().count())
}
