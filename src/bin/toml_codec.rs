use std::io::Read;

use clap::Parser;
use family_json::config::toml_config::{OutputConfig, ValidationSection};
use family_json::config::validate_entity;
use family_json::core::{ConfigProvider, WireFormat};
use family_json::utils::logger;
use family_json::{
    Codec, EntityKind, Family, FromJson, JsonWire, Person, Result, ToJson, TomlConfig, Validate,
};

#[derive(Parser)]
#[command(name = "toml_codec")]
#[command(about = "Decode/validate/re-encode driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "family-json.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override pretty-printing setting from config
    #[arg(long)]
    pretty: Option<bool>,

    /// Override validation setting from config
    #[arg(long)]
    validate: Option<bool>,
}

fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting TOML-driven codec");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // Apply command-line overrides
    if let Some(pretty) = args.pretty {
        config.output.get_or_insert_with(OutputConfig::default).pretty = Some(pretty);
        tracing::info!("🔧 Pretty-printing overridden to: {}", pretty);
    }
    if let Some(validate) = args.validate {
        config
            .validation
            .get_or_insert_with(ValidationSection::default)
            .enabled = Some(validate);
        tracing::info!("🔧 Validation overridden to: {}", validate);
    }

    if let Err(e) = config.validate_config() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    // Known-good after validate_config.
    let kind = match validate_entity("input.entity", &config.input.entity) {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    match run(&config, kind) {
        Ok(output) => {
            println!("{output}");
            tracing::info!("✅ Done");
        }
        Err(e) => {
            tracing::error!("❌ Processing failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run<C: ConfigProvider>(config: &C, kind: EntityKind) -> Result<String> {
    let codec = Codec::new(JsonWire);
    let text = read_input(config.input_path())?;
    tracing::info!("Processing {} document ({} bytes)", kind, text.len());

    match kind {
        EntityKind::Person => roundtrip::<Person, _, _>(&codec, &text, config),
        EntityKind::Family => roundtrip::<Family, _, _>(&codec, &text, config),
    }
}

fn roundtrip<T, W, C>(codec: &Codec<W>, text: &str, config: &C) -> Result<String>
where
    T: FromJson + ToJson + Validate,
    W: WireFormat,
    C: ConfigProvider,
{
    let value: T = codec.decode_str(text)?;

    if config.validation_enabled() {
        value.validate()?;
        tracing::info!("✅ Document is semantically valid");
    } else {
        tracing::warn!("Validation disabled by configuration");
    }

    let output = if config.pretty() {
        codec.encode_to_string_pretty(&value)?
    } else {
        codec.encode_to_string(&value)?
    };
    Ok(output)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            tracing::debug!("Reading input from {}", path);
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            tracing::debug!("Reading input from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
