use clap::{Parser, Subcommand};
use folio::contact::{ContactFields, ContactForm, EmailJsRelay, RelayCredentials, SubmitOutcome};
use folio::{config, content, generate, logging, output};
use std::path::PathBuf;

/// `X.Y.Z` on a tagged release, `dev@<revision>` otherwise.
fn version_string() -> &'static str {
    if env!("FOLIO_RELEASE") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("FOLIO_REVISION") {
        "" => "dev@unknown",
        revision => Box::leak(format!("dev@{revision}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static generator for a single-page developer portfolio")]
#[command(long_about = "\
Static generator for a single-page developer portfolio

Content files describe the page; sections render in a fixed order
(home, about-me, skills, education, certifications, projects, contact).

Content structure:

  content/
  ├── profile.toml          # Name, role, typed phrases, contact details (required)
  ├── about.md              # Biography (markdown)
  ├── skills.toml           # [[group]] with [[group.skill]] entries
  ├── education.toml        # [[entry]] timeline
  ├── certifications.toml   # [[certification]] cards
  ├── projects.toml         # [[project]] cards (first `preview` shown)
  ├── config.toml           # Site config (optional, overrides defaults)
  └── assets/               # Copied to the output root

Contact relay credentials are read from EMAILJS_SERVICE_ID,
EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY at build time.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page into the output directory
    Build,
    /// Validate the content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Send one message through the contact relay
    SendMessage {
        /// Sender's full name
        #[arg(long)]
        name: String,
        /// Sender's email address
        #[arg(long)]
        email: String,
        /// Message body
        #[arg(long)]
        message: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let content = content::load(&cli.source)?;
            let credentials = RelayCredentials::from_env();
            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&content, &cli.output, credentials.as_ref())?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let content = content::load(&cli.source)?;
            let credentials = RelayCredentials::from_env();
            output::print_check_output(&content, credentials.as_ref());
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::SendMessage {
            name,
            email,
            message,
        } => {
            let site_config = config::load_config(&cli.source)?;
            let relay = EmailJsRelay::new(&site_config.contact)?;
            let mut form = ContactForm::new();
            *form.fields_mut() = ContactFields {
                full_name: name,
                email,
                message,
            };
            let outcome = form.submit(&relay, RelayCredentials::from_env())?;
            println!("{}", outcome.notification().message);
            match outcome {
                SubmitOutcome::Sent => {}
                SubmitOutcome::MissingConfiguration(missing) => return Err(missing.into()),
                SubmitOutcome::Failed(err) => return Err(err.into()),
            }
        }
    }

    Ok(())
}
