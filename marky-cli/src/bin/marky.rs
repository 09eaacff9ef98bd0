use clap::Parser;
use log::debug;

use marky_core::model::chain_input::ChainInput;
use marky_core::model::markov_chain::take;
use marky_core::text::WordTokenizer;

/// Generates pseudo-random text from the word statistics of a passage.
#[derive(Parser)]
#[command(version, about)]
struct Args {
	/// Source text file
	file: String,

	/// Number of words to generate
	words: usize,

	/// Pairing step: distance between a word and its successor, negative to read backwards
	#[arg(long, default_value_t = 1, allow_negative_numbers = true)]
	step: isize,

	/// Seed for reproducible output
	#[arg(long)]
	seed: Option<u64>,

	/// Skip the cleanup of trailing non-alphanumeric characters. The tokenizer
	/// already splits punctuation off, so this only keeps words ending in a
	/// non-ASCII letter intact (ex. `café` instead of `caf`)
	#[arg(long)]
	keep_punctuation: bool,

	/// Reuse (or write) a binary word tree next to the source file
	#[arg(long)]
	cache: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	let mut input = ChainInput::new(args.step)?;
	input.seed = args.seed;
	input.fix_punctuation = !args.keep_punctuation;
	input.use_cache = args.cache;

	let mut chain = input.build_chain(&args.file, &WordTokenizer)?;
	debug!("{} known words in {}", chain.tree().len(), args.file);

	println!("{}", take(&mut chain, args.words).join(" "));
	Ok(())
}
