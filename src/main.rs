//! stepnet - CLI Entry Point
//!
//! Generate, encode, decode and evaluate threshold networks.

use clap::{Parser, Subcommand};
use stepnet::genetics::codec;
use stepnet::genome_file::GenomeRecord;
use stepnet::neural::{NetworkBuilder, Source};
use stepnet::{Config, Evaluator, Network, Topology};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "stepnet")]
#[command(version)]
#[command(about = "Binary-threshold perceptron networks with a 5-bit genotype codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },

    /// Build a random network from the configuration
    Random {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Random seed for reproducibility (overrides the config)
        #[arg(long)]
        seed: Option<u64>,

        /// Save the genome to this file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Print the network as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encode comma-separated integers into a bitstring
    Encode {
        #[arg(value_delimiter = ',', allow_negative_numbers = true, required = true)]
        values: Vec<i32>,
    },

    /// Decode a bitstring into integers
    Decode { bitstring: String },

    /// Propagate an input signal through a network
    Eval {
        /// Input arity followed by layer sizes, e.g. 3,1,2
        #[arg(short, long, value_delimiter = ',')]
        topology: Option<Vec<usize>>,

        /// Flat genotype
        #[arg(
            short,
            long,
            value_delimiter = ',',
            allow_hyphen_values = true,
            conflicts_with = "bitstring"
        )]
        genotype: Option<Vec<i32>>,

        /// Bitstring genotype
        #[arg(short, long)]
        bitstring: Option<String>,

        /// Genome file (topology and genotype)
        #[arg(long, conflicts_with_all = ["topology", "genotype", "bitstring"])]
        genome: Option<PathBuf>,

        /// Input signal
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        input: Vec<i32>,

        /// Print every layer's output
        #[arg(long)]
        trace: bool,
    },

    /// Show a stored genome
    Inspect {
        /// Genome file
        genome: PathBuf,

        /// Print the network as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The config, when the command takes one, decides the default log level
    let config = match &cli.command {
        Commands::Random { config, .. } => Some(load_config(config)?),
        _ => None,
    };

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(config.as_ref())),
    )
    .init();

    match cli.command {
        Commands::Init { output } => generate_config(output),

        Commands::Random {
            config: path,
            seed,
            save,
            json,
        } => {
            let config = config.unwrap_or_default();
            if path.exists() {
                log::info!("Loaded config from: {:?}", path);
            } else {
                log::info!("Using default configuration");
            }
            random_network(config, seed, save, json)
        }

        Commands::Encode { values } => {
            println!("{}", codec::encode_sequence(&values)?);
            Ok(())
        }

        Commands::Decode { bitstring } => {
            let values = codec::decode_sequence(bitstring.trim())?;
            let text: Vec<String> = values.iter().map(i32::to_string).collect();
            println!("{}", text.join(","));
            Ok(())
        }

        Commands::Eval {
            topology,
            genotype,
            bitstring,
            genome,
            input,
            trace,
        } => evaluate(topology, genotype, bitstring, genome, input, trace),

        Commands::Inspect { genome, json } => inspect(genome, json),
    }
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}

/// Config from `path`, or the default one if the file does not exist
fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    if path.exists() {
        Config::from_file(path)
    } else {
        Ok(Config::default())
    }
}

fn log_filter(config: Option<&Config>) -> &str {
    config.map_or("info", |c| c.logging.log_level.as_str())
}

fn random_network(
    mut config: Config,
    seed: Option<u64>,
    save: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if seed.is_some() {
        config.generation.seed = seed;
    }

    let mut source = config.generation.source()?;
    log::info!("Using seed: {}", source.seed());

    let net = NetworkBuilder::new(config.topology()?)
        .weight_mode(config.network.weight_mode)
        .build_with(&mut source)?;

    print_network(&net, json)?;

    if let Some(path) = save {
        GenomeRecord::from_network(&net, Some(source.seed())).save(&path)?;
        println!("Genome saved to: {:?}", path);
    }

    Ok(())
}

fn evaluate(
    topology: Option<Vec<usize>>,
    genotype: Option<Vec<i32>>,
    bitstring: Option<String>,
    genome: Option<PathBuf>,
    input: Vec<i32>,
    trace: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let net = match (genome, topology) {
        (Some(path), _) => GenomeRecord::load(&path)?.to_network()?,
        (None, Some(counts)) => {
            let topology = Topology::new(counts)?;
            match (genotype, bitstring) {
                (Some(genes), None) => Network::build(topology, Source::Genotype(&genes))?,
                (None, Some(bits)) => Network::build(topology, Source::Bitstring(bits.trim()))?,
                _ => return Err("give exactly one of --genotype or --bitstring".into()),
            }
        }
        (None, None) => return Err("give --genome, or --topology with a genotype".into()),
    };

    let evaluator = Evaluator::new(&net);
    if trace {
        for (i, signal) in evaluator.trace(&input)?.iter().enumerate() {
            println!("Layer {}: {:?}", i, signal);
        }
    } else {
        println!("Input: {:?}", input);
        println!("Output: {:?}", evaluator.propagate(&input)?);
    }

    Ok(())
}

fn inspect(genome: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let record = GenomeRecord::load(&genome)?;
    if let Some(seed) = record.seed {
        println!("Seed: {}", seed);
    }
    print_network(&record.to_network()?, json)
}

fn print_network(net: &Network, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(net)?);
        return Ok(());
    }

    println!("{}", net);
    println!();
    let genes: Vec<String> = net.to_genotype().iter().map(i32::to_string).collect();
    println!("Genotype: {}", genes.join(","));
    println!("Bitstring: {}", net.to_bitstring()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_follows_config() {
        let mut config = Config::default();
        config.logging.log_level = "debug".to_string();

        assert_eq!(log_filter(Some(&config)), "debug");
        assert_eq!(log_filter(None), "info");
    }

    #[test]
    fn test_load_config_reads_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.logging.log_level = "trace".to_string();
        config.save(&path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(log_filter(Some(&loaded)), "trace");

        let missing = load_config(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(log_filter(Some(&missing)), "info");
    }

    #[test]
    fn test_eval_genome_conflicts_with_inline_network() {
        let with_topology = Cli::try_parse_from([
            "stepnet", "eval", "--genome", "net.bin", "--topology", "2,1", "--input", "1,0",
        ]);
        assert!(with_topology.is_err());

        let with_bits = Cli::try_parse_from([
            "stepnet", "eval", "--genome", "net.bin", "--bitstring", "000010000100001",
            "--input", "1,0",
        ]);
        assert!(with_bits.is_err());

        let both_genes = Cli::try_parse_from([
            "stepnet", "eval", "--topology", "2,1", "--genotype", "1,1,1", "--bitstring",
            "000010000100001", "--input", "1,0",
        ]);
        assert!(both_genes.is_err());
    }

    #[test]
    fn test_eval_accepts_single_source() {
        let genome = Cli::try_parse_from(["stepnet", "eval", "--genome", "net.bin", "--input", "1,0"]);
        assert!(genome.is_ok());

        let genes = Cli::try_parse_from([
            "stepnet", "eval", "--topology", "2,1", "--genotype", "-1,1,1", "--input", "1,-1",
        ]);
        match genes.unwrap().command {
            Commands::Eval { genotype, input, .. } => {
                assert_eq!(genotype, Some(vec![-1, 1, 1]));
                assert_eq!(input, vec![1, -1]);
            }
            _ => panic!("expected eval"),
        }
    }
}
