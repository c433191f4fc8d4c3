use std::io::Read;

use clap::Parser;
use family_json::config::validate_entity;
use family_json::core::{ConfigProvider, WireFormat};
use family_json::utils::logger;
use family_json::{
    Body, CliConfig, Codec, EntityKind, EyeColor, Family, FromJson, JsonWire, Person,
    PhysicalAttributes, Result, ToJson, Validate,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting family-json CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let kind = match validate_entity("entity", &config.entity) {
        Ok(kind) => kind,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let result = if config.sample {
        tracing::info!("Emitting built-in sample person");
        encode(&Codec::new(JsonWire), &sample_person(), config.pretty)
    } else {
        run(&config, kind)
    };

    match result {
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
        tracing::warn!("Validation skipped (--no-validate)");
    }

    encode(codec, &value, config.pretty())
}

fn encode<T: ToJson, W: WireFormat>(codec: &Codec<W>, value: &T, pretty: bool) -> Result<String> {
    let output = if pretty {
        codec.encode_to_string_pretty(value)?
    } else {
        codec.encode_to_string(value)?
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

/// Built-in demo document: one fully populated person.
fn sample_person() -> Person {
    Person {
        name: "John Doe".to_string(),
        age: 30,
        body: Body {
            weight: 70.5,
            height: 1.75,
            physical_attributes: PhysicalAttributes {
                eye_color: EyeColor::Blue,
                hair_color: "Brown".to_string(),
            },
        },
    }
}
