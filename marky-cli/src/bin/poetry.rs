use clap::Parser;
use log::info;

use marky_core::model::chain_input::ChainInput;
use marky_core::poetry::couplet::{CoupletInput, compose_couplet};
use marky_core::poetry::rhyme::PronouncingDictionary;
use marky_core::text::WordTokenizer;

/// Writes rhyming couplets from the word statistics of a passage.
#[derive(Parser)]
#[command(version, about)]
struct Args {
	/// Source text file
	file: String,

	/// Number of words on each line
	words_per_line: usize,

	/// Number of couplets to write
	couplets: usize,

	/// Pronouncing dictionary in the CMU format
	#[arg(long, default_value = "cmudict.dict")]
	dict: String,

	/// Seed for reproducible output
	#[arg(long)]
	seed: Option<u64>,

	/// Attempts per couplet before giving up
	#[arg(long, default_value_t = 1000)]
	nb_try: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	let dictionary = PronouncingDictionary::load(&args.dict)?;

	let mut couplet_input = CoupletInput::new(args.words_per_line)?;
	couplet_input.nb_try = args.nb_try;

	// Both chains read the same passage, in opposite directions
	let mut forward_input = ChainInput::new(1)?;
	forward_input.fix_punctuation = false;
	forward_input.seed = args.seed;
	let mut backward_input = ChainInput::new(-1)?;
	backward_input.fix_punctuation = false;
	backward_input.seed = args.seed.map(|seed| seed.wrapping_add(1));

	let mut forward = forward_input.build_chain(&args.file, &WordTokenizer)?;
	let mut backward = backward_input.build_chain(&args.file, &WordTokenizer)?;

	for i in 0..args.couplets {
		match compose_couplet(&couplet_input, &mut forward, &mut backward, &dictionary) {
			Some(couplet) => println!("{couplet}\n"),
			None => {
				return Err(format!(
					"no rhyme found for couplet {} after {} attempts",
					i + 1,
					couplet_input.nb_try
				)
				.into());
			}
		}
	}
	info!("wrote {} couplets", args.couplets);

	Ok(())
}
