//! mlscan: Character-literal scanner for Standard ML sources.
//!
//! Usage:
//!   mlscan [options] [file...]
//!
//! Scans each file for character literals and reports the ones left open.

use clap::Parser as ClapParser;
use miette::{IntoDiagnostic, WrapErr};
use mldev_ast::SyntaxKind;
use mldev_core::LineMap;
use mldev_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use mldev_options::{MlConfig, CONFIG_FILE_NAME};
use mldev_scanner::{check_char_literals, CharRule, RuleBasedScanner, Token, TokenInfo};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "mlscan", about = "Scan Standard ML sources for character literals", disable_version_flag = true)]
struct Cli {
    /// Standard ML files to scan.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Path to mldev.json.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Print every character literal with its position.
    #[arg(long)]
    tokens: bool,

    /// Enable colored diagnostics.
    #[arg(long, default_value_t = true)]
    pretty: bool,

    /// Print the version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("mlscan Version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let exit_code = run_scan(&cli);
    process::exit(exit_code);
}

fn run_scan(cli: &Cli) -> i32 {
    let use_color = cli.pretty && atty_is_terminal();

    let config = match load_config(cli) {
        Ok(config) => config,
        Err(report) => {
            eprintln!("{:?}", report);
            return 1;
        }
    };

    let files = resolve_input_files(cli, config.as_ref());
    if files.is_empty() {
        print_diagnostic(&Diagnostic::new(&messages::NO_INPUT_FILES, &[]), None, use_color);
        return 1;
    }

    let category = config
        .as_ref()
        .map(|(_, c)| c.unterminated_char_literal())
        .unwrap_or_default()
        .category();

    let mut diagnostics = DiagnosticCollection::new();
    let mut line_maps: HashMap<String, LineMap> = HashMap::new();
    let mut read_failed = false;

    for file in &files {
        let name = file.display().to_string();
        let text = match std::fs::read_to_string(file) {
            Ok(text) => text,
            Err(e) => {
                let err = e.to_string();
                diagnostics.add(Diagnostic::new(&messages::CANNOT_READ_FILE_0_1, &[&name, &err]));
                read_failed = true;
                continue;
            }
        };

        let line_map = LineMap::new(&text);
        let tokens = scan_char_literals(&text);

        if cli.tokens {
            let chars: Vec<char> = text.chars().collect();
            for token in &tokens {
                let literal: String = chars[token.pos as usize..token.end as usize].iter().collect();
                println!("{}:{}\t{}", name, line_map.line_and_column_of(token.pos), literal);
            }
        }

        if let Some(category) = category {
            diagnostics.extend(check_char_literals(&name, &text, &tokens, category));
        }
        line_maps.insert(name, line_map);
    }

    diagnostics.sort();
    for diag in diagnostics.diagnostics() {
        let line_map = diag.file.as_ref().and_then(|f| line_maps.get(f));
        print_diagnostic(diag, line_map, use_color);
    }

    if read_failed {
        return 1;
    }

    if diagnostics.has_errors() {
        let count = diagnostics.error_count();
        if use_color {
            eprintln!(
                "\n{}Found {} error{}.{}",
                RED,
                count,
                if count == 1 { "" } else { "s" },
                RESET
            );
        } else {
            eprintln!(
                "\nFound {} error{}.",
                count,
                if count == 1 { "" } else { "s" }
            );
        }
        return 2;
    }

    0
}

/// Tokenize `text` and keep only its character literals.
fn scan_char_literals(text: &str) -> Vec<TokenInfo<SyntaxKind>> {
    let mut scanner =
        RuleBasedScanner::new(text).with_rule(CharRule::new(SyntaxKind::CharLiteral));
    scanner.set_default_token(Token::Other(SyntaxKind::Unknown));
    scanner
        .filter(|t| t.data() == Some(&SyntaxKind::CharLiteral))
        .collect()
}

/// The explicit `--config`, or mldev.json in the working directory if present.
fn load_config(cli: &Cli) -> miette::Result<Option<(PathBuf, MlConfig)>> {
    let path = match cli.config {
        Some(ref path) => PathBuf::from(path),
        None if Path::new(CONFIG_FILE_NAME).exists() => PathBuf::from(CONFIG_FILE_NAME),
        None => return Ok(None),
    };
    let config = mldev_options::parse_config_file(&path)
        .into_diagnostic()
        .wrap_err(format!("Failed to load configuration '{}'", path.display()))?;
    Ok(Some((path, config)))
}

fn resolve_input_files(cli: &Cli, config: Option<&(PathBuf, MlConfig)>) -> Vec<PathBuf> {
    if !cli.files.is_empty() {
        return cli.files.iter().map(PathBuf::from).collect();
    }
    match config {
        Some((path, config)) => config.resolve_files(path),
        None => Vec::new(),
    }
}

fn print_diagnostic(diag: &Diagnostic, line_map: Option<&LineMap>, use_color: bool) {
    let location = diag.span.map(|span| match line_map {
        Some(map) => map.line_and_column_of(span.start).to_string(),
        None => span.start.to_string(),
    });

    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        if let Some(ref file) = diag.file {
            eprint!("{}{}{}", CYAN, file, RESET);
            if let Some(ref location) = location {
                eprint!("({})", location);
            }
            eprint!(": ");
        }
        eprintln!(
            "{}{}{}{} {}ML{}{}: {}",
            BOLD, color, diag.category, RESET, CYAN, diag.code, RESET, diag.message_text
        );
    } else {
        if let Some(ref file) = diag.file {
            eprint!("{}", file);
            if let Some(ref location) = location {
                eprint!("({})", location);
            }
            eprint!(": ");
        }
        eprintln!("{} ML{}: {}", diag.category, diag.code, diag.message_text);
    }
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
