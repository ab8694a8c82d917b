use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use bsbm2json::conversion::loader::load_objects;
use bsbm2json::conversion::resolver::Catalog;
use bsbm2json::conversion::serializer::{ConversionOptions, JsonSerializer};
use bsbm2json::emitter::rdf_json::LiteralEscaping;
use bsbm2json::model::ontology::{bsbm, iso3166};

/// Serialize BSBM benchmark objects to RDF/JSON statement files.
#[derive(Parser)]
#[command(name = "bsbm2json", version, about)]
struct Cli {
    /// JSON file of objects (a JSON array or one object per line).
    input: PathBuf,

    /// Output base path; `.json` (and a shard index) is appended.
    #[arg(short, long, value_name = "BASE", default_value = "dataset")]
    output: PathBuf,

    /// Number of output files to distribute objects over.
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1)]
    shards: usize,

    /// Assert every ancestor product type on each product.
    #[arg(long)]
    forward_chaining: bool,

    /// Escape values as JSON strings instead of inserting them verbatim.
    #[arg(long)]
    escape_literals: bool,

    /// Namespace for instance IRIs.
    #[arg(long, value_name = "URI", default_value = bsbm::INST_NS)]
    instance_ns: String,

    /// Namespace country codes are resolved under.
    #[arg(long, value_name = "URI", default_value = iso3166::NS)]
    country_ns: String,

    /// Comma-separated language table for review texts.
    #[arg(long, value_name = "CODES", value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    // --quiet: off; --verbose: RUST_LOG or "info"; default: warnings only.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!(input = %cli.input.display(), "loading objects");
    let objects = load_objects(&cli.input)?;

    let mut catalog =
        Catalog::from_objects(&objects).with_country_namespace(Some(cli.country_ns.clone()));
    if let Some(languages) = &cli.languages {
        catalog = catalog.with_languages(languages.clone());
    }
    info!(
        objects = objects.len(),
        product_types = catalog.product_type_count(),
        "indexed input"
    );

    let options = ConversionOptions {
        instance_ns: cli.instance_ns.clone(),
        forward_chaining: cli.forward_chaining,
        escaping: if cli.escape_literals {
            LiteralEscaping::Json
        } else {
            LiteralEscaping::Verbatim
        },
    };

    let mut serializer = JsonSerializer::create(&cli.output, cli.shards, options)?;
    serializer.gather_data(&objects, &catalog)?;
    let triple_count = serializer.triples_generated();
    let shard_count = serializer.shard_count();
    serializer.serialize()?;

    if !cli.quiet {
        eprintln!("Serialized {triple_count} triples into {shard_count} file(s)");
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
