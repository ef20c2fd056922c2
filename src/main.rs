use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotcode::{
    cli, config, error,
    types::{BarColor, CodeFormat},
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create cover + Spotify Code artwork
    Code(CodeArgs),

    /// Verify the configured Spotify API credentials
    Token,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CodeArgs {
    /// Spotify URI, e.g. spotify:album:6BzxX6zkDsYKFJ04ziU5xQ
    pub uri: String,

    /// Output file name without extension (defaults to the resource id)
    #[clap(long, short)]
    pub output: Option<String>,

    /// Color of the code bars
    #[clap(long, value_enum, default_value_t = BarColor::White)]
    pub bar_color: BarColor,

    /// Image format requested from the code service
    #[clap(long, value_enum, default_value_t = CodeFormat::Png)]
    pub format: CodeFormat,

    /// Background color as hex (skips dominant color detection)
    #[clap(long)]
    pub color: Option<String>,

    /// Code width in pixels (defaults to the cover width)
    #[clap(long)]
    pub size: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Code(args) => {
            cli::code(cli::CodeOptions {
                uri: args.uri,
                output: args.output,
                bar_color: args.bar_color,
                format: args.format,
                color: args.color,
                size: args.size,
            })
            .await
        }
        Command::Token => cli::token().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
    }
}
