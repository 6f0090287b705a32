//! `corelink` — command-line interface for unit topologies and record packing.
//!
//! ```text
//! USAGE:
//!   corelink edges   --topology <kind> --units <n>   Print every directed edge
//!   corelink summary --topology <kind> --units <n>   Per-channel counts and cycles
//!   corelink pack    <text> --budget <bytes>         Pack text into 32-bit words
//!   corelink unpack  <word>... --chars <n>           Unpack words back to text
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use corelink_codec::BitPacker;
use corelink_graph::{Channel, EdgeTable, TopologyConfig, TopologyGenerator, TopologyKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "corelink", about = "Unit interconnect topologies and record packing", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print every edge of a topology.
    Edges(TopologyArgs),
    /// Count edges per channel and closed cycles.
    Summary(TopologyArgs),
    /// Pack text into big-endian 32-bit words.
    Pack {
        /// Text to pack.
        text: String,
        /// Byte budget (positive multiple of 4).
        #[arg(short, long)]
        budget: usize,
    },
    /// Unpack 32-bit words back into text.
    Unpack {
        /// Words in hex (0x prefix optional).
        #[arg(required = true)]
        words: Vec<String>,
        /// Characters to read (positive multiple of 4).
        #[arg(short, long)]
        chars: usize,
        /// Strip trailing padding.
        #[arg(short, long)]
        trim: bool,
    },
}

#[derive(Args)]
struct TopologyArgs {
    /// ring, ring-with-leader or pentagram.
    #[arg(short, long, default_value = "ring")]
    topology: TopologyKind,
    /// Total unit slots.
    #[arg(short, long)]
    units: usize,
    /// Units per cluster.
    #[arg(short, long, default_value_t = corelink_graph::CLUSTER_SIZE)]
    cluster_size: usize,
    /// Empty slot indices, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    empty: Vec<usize>,
}

impl TopologyArgs {
    fn build(&self) -> Result<(TopologyGenerator, Vec<Option<usize>>)> {
        let config = TopologyConfig::for_kind(self.topology)
            .with_cluster_size(self.cluster_size);
        let generator = TopologyGenerator::new(config)?;

        let mut units: Vec<Option<usize>> = (0..self.units).map(Some).collect();
        for &slot in &self.empty {
            let entry = units
                .get_mut(slot)
                .with_context(|| format!("empty slot {slot} is outside 0..{}", self.units))?;
            *entry = None;
        }
        tracing::debug!(
            "Built {} unit slots ({} empty) for {}",
            units.len(),
            self.empty.len(),
            self.topology
        );
        Ok((generator, units))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .init();

    match cli.command {
        Cmd::Edges(args) => cmd_edges(&args)?,
        Cmd::Summary(args) => cmd_summary(&args)?,
        Cmd::Pack { text, budget } => cmd_pack(&text, budget)?,
        Cmd::Unpack { words, chars, trim } => cmd_unpack(&words, chars, trim)?,
    }

    Ok(())
}

fn cmd_edges(args: &TopologyArgs) -> Result<()> {
    let (generator, units) = args.build()?;

    println!("{:>5}    {:<5} {:<15} LABEL", "SRC", "DST", "CHANNEL");
    for edge in generator.edges(&units)? {
        println!("{}", edge.link);
    }
    Ok(())
}

fn cmd_summary(args: &TopologyArgs) -> Result<()> {
    let (generator, units) = args.build()?;
    let table: EdgeTable = generator.table(&units)?;
    let populated = units.iter().flatten().count();

    println!("Topology     : {}", generator.kind());
    println!(
        "Units        : {} slots, {} populated, cluster size {}",
        units.len(),
        populated,
        generator.indexer().size()
    );
    println!();

    for (channel, count) in table.summary() {
        println!(
            "  {:<15} {:>6}  partition {:<12} cycles {}",
            channel,
            count,
            channel.partition(),
            table.cycles(channel).len()
        );
    }
    println!();
    println!("Total edges  : {}", table.len());

    let loops = table.self_loops().count();
    if loops > 0 {
        println!("Self loops   : {loops}");
    }
    if generator.kind() == TopologyKind::RingWithLeader {
        let leaders = table
            .links()
            .iter()
            .filter(|l| l.channel == Channel::Command && l.label == 0)
            .count();
        println!("Leaders      : {leaders}");
    }
    Ok(())
}

fn cmd_pack(text: &str, budget: usize) -> Result<()> {
    let record = BitPacker::new().encode(text, budget)?;
    let words: Vec<String> = record
        .words()
        .iter()
        .map(|w| format!("0x{w:08X}"))
        .collect();
    println!("{}", words.join(" "));
    Ok(())
}

fn cmd_unpack(words: &[String], chars: usize, trim: bool) -> Result<()> {
    let words = words
        .iter()
        .map(|w| parse_word(w))
        .collect::<Result<Vec<u32>>>()?;

    let packer = BitPacker::new();
    let text = if trim {
        packer.decode_trimmed(&words, chars)?
    } else {
        packer.decode(&words, chars)?
    };
    println!("{text:?}");
    Ok(())
}

fn parse_word(raw: &str) -> Result<u32> {
    let hex = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    u32::from_str_radix(&hex.replace('_', ""), 16)
        .with_context(|| format!("not a 32-bit hex word: {raw}"))
}
