use crate::config::{Config, TokenFormat};
use crate::error::CompilerError;
use crate::scanner::Scanner;
use crate::token::Token;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

mod ast;
mod config;
mod error;
mod scanner;
mod token;

#[derive(Parser)]
#[command(author, version, about = "Lox Compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a Lox script and print its tokens
    Run {
        /// Path to the script to scan
        script: PathBuf,
        /// Print tokens as JSON, one object per line
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive prompt, scanning one line at a time
    Repl,
    /// Manage loxc configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Edit the config file for the current environment
    Edit,
    /// Show the current config file contents
    Show,
    /// Initialize a new config file with defaults
    Init,
}

/// Scan one source buffer and print its tokens. Returns whether any lexical
/// fault was reported; the caller decides what a failure means.
fn run(source: &str, format: TokenFormat) -> bool {
    let mut had_error = false;

    let tokens = Scanner::new(source, |line, error| {
        eprintln!("[line {}] Error: {}", line, error);
        had_error = true;
    })
    .scan_tokens();

    print_tokens(&tokens, format);
    had_error
}

fn print_tokens(tokens: &[Token], format: TokenFormat) {
    for token in tokens {
        match format {
            TokenFormat::Pretty => println!("{}", token),
            TokenFormat::Json => match serde_json::to_string(token) {
                Ok(line) => println!("{}", line),
                Err(err) => eprintln!("Error serializing token: {}", err),
            },
        }
    }
}

fn run_file(path: &PathBuf, format: TokenFormat) -> Result<(), CompilerError> {
    if !path.exists() {
        return Err(CompilerError::FileNotFound(format!(
            "Script not found: {}",
            path.display()
        )));
    }

    let source = fs::read_to_string(path).map_err(CompilerError::Io)?;

    if run(&source, format) {
        process::exit(65);
    }

    Ok(())
}

fn run_prompt(config: &Config) -> Result<(), CompilerError> {
    let stdin = io::stdin();

    loop {
        print!("{}", config.prompt);
        io::stdout().flush().map_err(CompilerError::Io)?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).map_err(CompilerError::Io)?;
        if read == 0 {
            break;
        }

        // Faults never end the session; the flag resets with each line.
        run(line.trim_end(), config.format);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Run { script, json } => {
            let format = if json { TokenFormat::Json } else { config.format };
            run_file(&script, format)?;
        }
        Commands::Repl => {
            run_prompt(&config)?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Edit => {
                let editor = std::env::var("EDITOR").unwrap_or_else(|_| {
                    if cfg!(windows) {
                        String::from("notepad")
                    } else {
                        String::from("nano")
                    }
                });

                let config_path = Config::get_config_path();
                if !config_path.exists() {
                    config.save()?;
                }

                process::Command::new(editor).arg(config_path).status()?;
            }
            ConfigCommands::Show => {
                let config_path = Config::get_config_path();
                if !config_path.exists() {
                    config.save()?;
                }

                let contents = fs::read_to_string(&config_path)?;
                println!("{}", contents);
            }
            ConfigCommands::Init => {
                let config_path = Config::get_config_path();
                if config_path.exists() {
                    println!("Config file already exists at: {}", config_path.display());
                    println!("Use 'loxc config edit' to modify it or remove the file to reinitialize.");
                } else {
                    config.save()?;
                    println!("Initialized new config file at: {}", config_path.display());
                    println!("Use 'loxc config edit' to modify it.");
                }
            }
        },
    }

    Ok(())
}
