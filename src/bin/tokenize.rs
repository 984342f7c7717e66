use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser as ClapParser;
use colored::Colorize;
use log::error;
use tsc_lex::lexer::{LanguageVariant, LanguageVersion, Lexer, Token, TokenKind};

/// Lexes a TypeScript/JavaScript/JSX source file and prints its token
/// stream.
#[derive(ClapParser, Debug)]
#[command(author, version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// The source file to lex.
    #[arg(index = 1)]
    file: PathBuf,

    /// ECMAScript syntax version to gate keywords and regex flags against.
    #[arg(long, value_enum, default_value = "es-next")]
    version: CliVersion,

    /// Which sub-lexer to activate for `<`: plain TypeScript or JSX.
    #[arg(long, value_enum, default_value = "ts")]
    variant: CliVariant,

    /// Print the token stream as a JSON array instead of a human-readable dump.
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum CliVersion {
    Json,
    Es3,
    Es5,
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    EsNext,
}

impl From<CliVersion> for LanguageVersion {
    fn from(v: CliVersion) -> Self {
        match v {
            CliVersion::Json => LanguageVersion::Json,
            CliVersion::Es3 => LanguageVersion::Es3,
            CliVersion::Es5 => LanguageVersion::Es5,
            CliVersion::Es2015 => LanguageVersion::Es2015,
            CliVersion::Es2016 => LanguageVersion::Es2016,
            CliVersion::Es2017 => LanguageVersion::Es2017,
            CliVersion::Es2018 => LanguageVersion::Es2018,
            CliVersion::Es2019 => LanguageVersion::Es2019,
            CliVersion::Es2020 => LanguageVersion::Es2020,
            CliVersion::Es2021 => LanguageVersion::Es2021,
            CliVersion::Es2022 => LanguageVersion::Es2022,
            CliVersion::EsNext => LanguageVersion::EsNext,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum CliVariant {
    Ts,
    Jsx,
}

impl From<CliVariant> for LanguageVariant {
    fn from(v: CliVariant) -> Self {
        match v {
            CliVariant::Ts => LanguageVariant::TypeScript,
            CliVariant::Jsx => LanguageVariant::Jsx,
        }
    }
}

fn main() -> anyhow::Result<()> {
    simple_logger::init_with_level(log::Level::Warn)?;
    let args = Cli::parse();

    let file = File::open(&args.file)?;
    let source = args.file.to_string_lossy().into_owned();
    let lexer = Lexer::with_options(
        source.as_str(),
        BufReader::new(file),
        args.version.into(),
        args.variant.into(),
    );

    let mut tokens = Vec::new();
    for result in lexer {
        match result {
            Ok(token) => tokens.push(token),
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            print_human(token);
        }
    }

    Ok(())
}

fn print_human(token: &Token) {
    let loc = format!("{}", token.location).bright_black();
    let rendered = format!("{token}");
    let tag = format!("{:<20}", tag_name(&token.kind));
    let colored_tag = match &token.kind {
        TokenKind::Keyword(_) => tag.blue().bold(),
        TokenKind::Punct(_) => tag.yellow(),
        TokenKind::Identifier(_) => tag.white(),
        TokenKind::Numeric(_) => tag.magenta(),
        TokenKind::StringLiteral(_) | TokenKind::TemplateStart | TokenKind::TemplateChunk(_) | TokenKind::TemplateEnd => {
            tag.green()
        }
        TokenKind::Regex(_) => tag.cyan(),
        TokenKind::Comment(_) | TokenKind::MultilineComment(_) => tag.bright_black(),
        TokenKind::ConflictMarker(_) => tag.red().bold(),
        _ if tag.trim_end().starts_with("Jsx") => tag.cyan(),
        _ => tag.normal(),
    };
    println!("{loc:>16}  {colored_tag} {rendered}");
}

fn tag_name(kind: &TokenKind) -> String {
    // `{:?}` on a unit-like match gives a stable, lowercase-free tag without
    // a giant hand-written mapping; we only need the variant name, so split
    // off whatever comes after it.
    let debug = format!("{kind:?}");
    debug
        .split(['(', '{', ' '])
        .next()
        .unwrap_or(&debug)
        .to_string()
}
