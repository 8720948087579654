//! numbase - Convert numbers between radices
//!
//! This tool parses a number written in binary, octal, decimal, hexadecimal
//! or a custom radix and prints it in any other radix.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use numbase_core::{
    CodecConfig, DictionaryFile, NumberCodec, RadixDefinition, RadixDefinitionBuilder,
    RadixDetector,
};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Convert numbers between binary, octal, decimal, hexadecimal and custom radices
#[derive(Parser, Debug)]
#[command(name = "numbase")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Numeric group separator of the locale, stripped from input
    #[arg(long, default_value = ",", global = true)]
    locale_separator: char,

    /// Also strip each radix's own group separator from input
    #[arg(long, global = true)]
    strip_radix_separator: bool,

    /// TOML file with custom radix definitions, referenced by name
    #[arg(long, env = "NUMBASE_DICTIONARIES", global = true)]
    dictionaries: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a value from one radix to others
    Convert(ConvertArgs),

    /// Print the built-in radix a value is most likely written in
    Detect {
        /// The value to classify
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Validate a custom radix definition
    Validate(CustomRadixArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// The value to convert
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Source radix: a built-in name, a dictionary entry or `custom` (default: detect)
    #[arg(short, long)]
    from: Option<String>,

    /// Target radix, repeatable (default: all built-ins)
    #[arg(short, long)]
    to: Vec<String>,

    /// Insert group separators in the output
    #[arg(short, long)]
    grouped: bool,

    #[command(flatten)]
    custom: CustomRadixArgs,
}

#[derive(Args, Debug, Default)]
struct CustomRadixArgs {
    /// Base number of the custom radix
    #[arg(long)]
    base: Option<u32>,

    /// Digit alphabet of the custom radix (default: 0-9a-z)
    #[arg(long)]
    alphabet: Option<String>,

    /// Display name of the custom radix
    #[arg(long)]
    name: Option<String>,

    /// Digits per group for the custom radix
    #[arg(long)]
    group_size: Option<u32>,

    /// Group separator for the custom radix
    #[arg(long)]
    group_separator: Option<char>,

    /// Render the custom radix with a sign instead of as a bit pattern
    #[arg(long)]
    signed: bool,
}

impl CustomRadixArgs {
    fn build(&self) -> Result<RadixDefinition> {
        let Some(base) = self.base else {
            bail!("--base is required for a custom radix");
        };

        let mut builder = RadixDefinitionBuilder::new(base).signed(self.signed);
        if let Some(ref alphabet) = self.alphabet {
            builder = builder.alphabet(alphabet.as_str());
        }
        if let Some(ref name) = self.name {
            builder = builder.display_name(name.as_str());
        }
        if let Some(size) = self.group_size {
            builder = builder.group_size(size);
        }
        if let Some(separator) = self.group_separator {
            builder = builder.group_separator(separator);
        }

        Ok(builder.build()?)
    }
}

/// Resolves radix names against built-ins, the dictionary file and `custom`
struct RadixResolver<'a> {
    dictionaries: Option<DictionaryFile>,
    custom: &'a CustomRadixArgs,
}

impl<'a> RadixResolver<'a> {
    fn new(cli: &Cli, custom: &'a CustomRadixArgs) -> Result<Self> {
        let dictionaries = match cli.dictionaries {
            Some(ref path) => {
                let file = DictionaryFile::load(path)
                    .with_context(|| format!("Failed to load dictionaries: {}", path.display()))?;
                debug!("Loaded {} custom radices", file.radices.len());
                Some(file)
            }
            None => None,
        };

        Ok(Self {
            dictionaries,
            custom,
        })
    }

    fn resolve(&self, name: &str) -> Result<RadixDefinition> {
        if name.eq_ignore_ascii_case("custom") {
            return self.custom.build().context("Invalid custom radix");
        }

        if let Some(radix) = RadixDefinition::by_name(name) {
            return Ok(radix.clone());
        }

        if let Some(entry) = self.dictionaries.as_ref().and_then(|d| d.find(name)) {
            return entry
                .to_definition()
                .with_context(|| format!("Invalid dictionary entry '{}'", entry.name));
        }

        Err(numbase_core::Error::unknown_radix(name).into())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let codec = NumberCodec::with_config(
        CodecConfig::new()
            .locale_group_separator(cli.locale_separator)
            .strip_radix_separator(cli.strip_radix_separator),
    );

    match cli.command {
        Command::Convert(ref args) => run_convert(&cli, args, &codec),
        Command::Detect { ref value } => run_detect(value, &codec),
        Command::Validate(ref args) => run_validate(args),
    }
}

/// Convert a value and print it in every requested radix
fn run_convert(cli: &Cli, args: &ConvertArgs, codec: &NumberCodec) -> Result<()> {
    let resolver = RadixResolver::new(cli, &args.custom)?;

    let source = match args.from {
        Some(ref name) => resolver.resolve(name)?,
        None => {
            let Some(radix) = RadixDetector::with_codec(codec.clone()).detect(&args.value) else {
                bail!("Could not detect the radix of '{}' (use --from)", args.value);
            };
            info!("Detected {}", radix.display_name());
            radix.clone()
        }
    };

    let Some(value) = codec
        .parse(&args.value, &source)
        .with_context(|| format!("Failed to parse '{}' as {}", args.value, source))?
    else {
        bail!("No value to convert");
    };

    debug!("Parsed value {} from {}", value, source);

    let targets: Vec<RadixDefinition> = if args.to.is_empty() {
        RadixDefinition::builtins()
            .iter()
            .map(|&radix| radix.clone())
            .collect()
    } else {
        args.to
            .iter()
            .map(|name| resolver.resolve(name))
            .collect::<Result<Vec<_>>>()?
    };

    for line in render_targets(codec, value, &targets, args.grouped) {
        println!("{}", line);
    }

    Ok(())
}

/// Render a value in each target, labelled when there is more than one
fn render_targets(
    codec: &NumberCodec,
    value: i64,
    targets: &[RadixDefinition],
    grouped: bool,
) -> Vec<String> {
    if let [single] = targets {
        return vec![codec.format(value, single, grouped)];
    }

    targets
        .iter()
        .map(|radix| format!("{}: {}", radix, codec.format(value, radix, grouped)))
        .collect()
}

/// Print the detected radix of a value
fn run_detect(value: &str, codec: &NumberCodec) -> Result<()> {
    match RadixDetector::with_codec(codec.clone()).detect(value) {
        Some(radix) => {
            println!("{}", radix);
            Ok(())
        }
        None => bail!("'{}' does not look like a number in any built-in radix", value),
    }
}

/// Build a custom radix and describe it
fn run_validate(args: &CustomRadixArgs) -> Result<()> {
    let radix = args.build()?;
    let symbols: String = radix
        .alphabet()
        .iter()
        .take(radix.base_number() as usize)
        .collect();

    println!(
        "{}: base {}, symbols \"{}\", groups of {} separated by '{}'{}",
        radix,
        radix.base_number(),
        symbols,
        radix.group_size(),
        radix.group_separator(),
        if radix.is_signed() { ", signed" } else { "" }
    );

    Ok(())
}
