use clap::{Parser, Subcommand, ValueEnum};
use kw_tokens::Design;
use std::path::Path;

#[derive(Parser)]
#[command(name = "kw-css")]
#[command(about = "kw theme stylesheet generator")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a design token file to CSS
    Build {
        /// Design token JSON file (built-in defaults when omitted)
        #[arg(short, long)]
        tokens: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<String>,

        /// Base path or URL prepended to relative font locators
        #[arg(long)]
        asset_base: Option<String>,

        /// Which part of the stylesheet to emit
        #[arg(long, value_enum, default_value_t = Part::Styles)]
        part: Part,
    },

    /// Print the built-in design tokens as JSON
    Defaults,

    /// Check a design token file for errors without generating output
    Check {
        /// Design token JSON file
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Part {
    /// Minified stylesheet: font faces, variables and component rules
    Styles,
    /// Only the @font-face rules
    FontFaces,
    /// Only the :root custom-property block
    Variables,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Build {
            tokens,
            out,
            asset_base,
            part,
        } => cmd_build(tokens.as_deref(), out.as_deref(), asset_base.as_deref(), part),
        Command::Defaults => cmd_defaults(),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_design(path: &str) -> Design {
    let source = read_source(path);
    match Design::from_json(&source) {
        Ok(design) => design,
        Err(e) => {
            eprintln!("{e} ({path})");
            std::process::exit(1);
        }
    }
}

fn cmd_build(tokens: Option<&str>, out: Option<&str>, asset_base: Option<&str>, part: Part) {
    let design = match tokens {
        Some(path) => load_design(path),
        None => {
            log::debug!("no token file given, using built-in defaults");
            Design::default()
        }
    };
    let design = match asset_base {
        Some(base) => design.with_asset_base(base),
        None => design,
    };

    let css = match part {
        Part::Styles => kw_css::get_styles(&design),
        Part::FontFaces => kw_css::get_font_faces(&design),
        Part::Variables => kw_css::get_css_variables(&design),
    };

    match out {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &css) {
                eprintln!("Error writing {path}: {e}");
                std::process::exit(1);
            }
            eprintln!("Built: {path}");
        }
        None => println!("{css}"),
    }
}

fn cmd_defaults() {
    match Design::default().to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(path: &str) {
    let design = load_design(path);

    for (idx, face) in design.font_faces.iter().enumerate() {
        if !face.has_sources() {
            log::warn!("font face #{idx} ('{}') has no sources", face.name);
        }
    }

    eprintln!("OK: {path}");
}
