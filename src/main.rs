use collapsible_table::errors::AppResult;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::process;

struct Args {
    config: Option<PathBuf>,
    log: Option<PathBuf>,
}

fn main() -> AppResult<()> {
    let args = parse_args();

    // The terminal belongs to the TUI, so logs only go to a file
    if let Some(log_path) = args.log {
        let log_file = File::create(log_path)?;
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    collapsible_table::demo::run(args.config)?;
    Ok(())
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut args_iter = args.iter();
    let mut parsed = Args {
        config: None,
        log: None,
    };

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("collapsible-table {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-c" | "--config" => {
                parsed.config = Some(PathBuf::from(require_value(arg, args_iter.next())));
            }
            "--log" => {
                parsed.log = Some(PathBuf::from(require_value(arg, args_iter.next())));
            }
            arg => {
                eprintln!("error: unknown option '{}'", arg);
                print_help();
                process::exit(1);
            }
        }
    }

    parsed
}

fn require_value<'a>(option: &str, value: Option<&'a String>) -> &'a str {
    value.map(String::as_str).unwrap_or_else(|| {
        eprintln!("error: option '{}' requires an argument", option);
        process::exit(1);
    })
}

fn print_help() {
    println!("collapsible-table - collapsible sections demo");
    println!();
    println!("USAGE:");
    println!("    collapsible-table [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <path>  Read the table layout and theme from <path>");
    println!("        --log <path>     Write debug logs to <path>");
    println!("    -h, --help           Print help information");
    println!("    -V, --version        Print version information");
    println!();
    println!("KEYS:");
    println!("    j/k, Down/Up   Move between rows");
    println!("    g/G            Jump to first/last row");
    println!("    Tab, Enter     Toggle the header under the cursor");
    println!("    C / E          Collapse / expand all sections");
    println!("    Ctrl-r         Reload the config file");
    println!("    q, Ctrl-c      Quit");
}
