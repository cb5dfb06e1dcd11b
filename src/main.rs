mod report;

use rhymekit::{
    DATA_DIR_ENV, DictionaryPaths, MULTIPLES_FILE, MULTIPLES_PATH_ENV, Phrase, PronunciationStore, RHYMES_FILE,
    RHYMES_PATH_ENV, WORDS_FILE, WORDS_PATH_ENV,
};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

const DEFAULT_LIMIT: usize = 20;

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let store = PronunciationStore::new(config.paths);
    let phrase = match Phrase::with_store(&config.input, &store) {
        Ok(phrase) => phrase,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = report::print_phrase(&phrase, config.limit, config.color) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    input: String,
    paths: DictionaryPaths,
    limit: usize,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut paths = DictionaryPaths::from_env();
    let mut limit = DEFAULT_LIMIT;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("rhymekit {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--words" => paths.words = path_value(&arg, args.next())?,
            "--multiples" => paths.multiples = path_value(&arg, args.next())?,
            "--rhymes" => paths.rhymes = path_value(&arg, args.next())?,
            "--limit" => {
                let value = args.next().ok_or_else(|| "error: --limit expects a value".to_string())?;
                limit = parse_limit(&value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--limit=") => {
                limit = parse_limit(arg.trim_start_matches("--limit="))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, paths, limit, color })
}

fn path_value(flag: &str, value: Option<String>) -> Result<PathBuf, String> {
    value.map(PathBuf::from).ok_or_else(|| format!("error: {flag} expects a path"))
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value.parse::<usize>().map_err(|_| format!("error: invalid --limit '{value}' (expected a non-negative integer)"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "rhymekit {version}

Syllable count and rhymes for a phrase.

Usage:
  rhymekit [OPTIONS] [--] <phrase...>

Options:
  --words <path>       Primary word list. Default: ${words_env} or <data>/{words_file}
  --multiples <path>   Multiple-pronunciation list. Default: ${multiples_env} or <data>/{multiples_file}
  --rhymes <path>      Rhyme list. Default: ${rhymes_env} or <data>/{rhymes_file}
  --limit <n>          Rhymes shown per rhyme key. Default: {default_limit}
  --color              Force ANSI color output.
  --no-color           Disable ANSI color output.
  -h, --help           Show this help message.
  -V, --version        Print version information.

<data> is ${data_env} when set, otherwise the data/ directory shipped with
rhymekit. Reads the phrase from stdin when none is given. Set RUST_LOG=debug to
trace dictionary loading.

Exit codes:
  0  Success.
  1  Dictionary could not be loaded.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_limit = DEFAULT_LIMIT,
        words_env = WORDS_PATH_ENV,
        multiples_env = MULTIPLES_PATH_ENV,
        rhymes_env = RHYMES_PATH_ENV,
        data_env = DATA_DIR_ENV,
        words_file = WORDS_FILE,
        multiples_file = MULTIPLES_FILE,
        rhymes_file = RHYMES_FILE,
    )
}
