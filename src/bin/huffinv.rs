use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use dsi_progress_logger::{ProgressLog, ProgressLogger};
use log::{info, warn};
use nary_huffman::inventory::{Inventory, InventoryAttribute, InventoryCompressor, SymbolSource};
use nary_huffman::{DEFAULT_ORDER, MAX_ORDER};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const PRODUCT_NAMES: [&str; 8] = ["Chair", "Desk", "Lamp", "Shelf", "Sofa", "Stool", "Bench", "Cabinet"];

const ATTRIBUTE_NAMES: [&str; 6] = ["weight", "width", "height", "depth", "price", "color"];

#[derive(Parser, Debug)]
#[command(about = "Compresses inventory records with an n-ary Huffman code", long_about = None)]
struct Args {
    /// A file with one flattened product per line. Random products are generated if missing.
    input: Option<PathBuf>,

    /// The order of the Huffman tree.
    #[clap(short, long, default_value_t = DEFAULT_ORDER)]
    order: usize,

    /// Prints the code table.
    #[clap(short, long)]
    table: bool,

    /// The number of random products to generate when no input is given.
    #[clap(short, long, default_value_t = 100)]
    n: usize,

    /// The seed used to generate random products.
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// The verbosity of the log on stderr.
    #[clap(short, long, default_value_t = 2)]
    verbosity: usize,
}

/// Generates `n` products with random attributes.
fn random_inventory(n: usize, seed: u64) -> Inventory {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut inventory = Inventory::new();

    for index in 0..n {
        let name = format!("{} {}", PRODUCT_NAMES.choose(&mut rng).unwrap_or(&"Item"), index);
        let amount = rng.gen_range(1..=ATTRIBUTE_NAMES.len());
        let chosen = ATTRIBUTE_NAMES
            .choose_multiple(&mut rng, amount)
            .copied()
            .collect::<Vec<_>>();
        // quarters, so that six decimals are always enough to write the value exactly
        let attributes = chosen
            .into_iter()
            .map(|attribute| InventoryAttribute::new(attribute, (rng.gen_range(0.0..500.0_f64) * 4.0).round() / 4.0))
            .collect();
        inventory.add_product(attributes, name, rng.gen_range(0..50));
    }
    inventory
}

fn run<const ORDER: usize>(inventory: &Inventory, print_table: bool) -> Result<()> {
    let mut compressor = InventoryCompressor::<ORDER>::new();
    compressor.build_huffman(inventory)?;

    if print_table {
        print!("{}", compressor);
    }

    let mut pl = ProgressLogger::default();
    pl.item_name("product")
        .expected_updates(Some(inventory.len()));
    pl.start("Encoding and decoding products...");

    let (mut plain_len, mut code_len, mut mismatches) = (0usize, 0usize, 0usize);
    for index in 0..inventory.len() {
        let code = compressor.encode_record(inventory, index)?;
        let decoded = compressor.decode_product(&code)?;

        let flattened = InventoryCompressor::<ORDER>::product_to_string(
            inventory.attributes_of(index)?,
            inventory.name_of(index)?,
        );
        if decoded.text != flattened {
            warn!("Product {} does not survive the round trip", index);
            mismatches += 1;
        }

        plain_len += flattened.chars().count();
        code_len += code.len();
        pl.update();
    }
    pl.done();

    info!(
        "{} characters encoded in {} code characters ({:.3} per character, {} mismatches)",
        plain_len,
        code_len,
        code_len as f64 / plain_len.max(1) as f64,
        mismatches
    );

    if mismatches > 0 {
        bail!("{} products did not survive the round trip", mismatches);
    }
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(args.verbosity)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let inventory = match &args.input {
        Some(path) => Inventory::from_path(path)?,
        None => random_inventory(args.n, args.seed),
    };

    match args.order {
        2 => run::<2>(&inventory, args.table),
        3 => run::<3>(&inventory, args.table),
        4 => run::<4>(&inventory, args.table),
        5 => run::<5>(&inventory, args.table),
        6 => run::<6>(&inventory, args.table),
        7 => run::<7>(&inventory, args.table),
        8 => run::<8>(&inventory, args.table),
        9 => run::<9>(&inventory, args.table),
        10 => run::<10>(&inventory, args.table),
        11 => run::<11>(&inventory, args.table),
        12 => run::<12>(&inventory, args.table),
        13 => run::<13>(&inventory, args.table),
        14 => run::<14>(&inventory, args.table),
        15 => run::<15>(&inventory, args.table),
        16 => run::<16>(&inventory, args.table),
        order => bail!("The order must be in [2, {}], got {}", MAX_ORDER, order),
    }
}
