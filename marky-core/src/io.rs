use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::io;

/// Reads a whole text file into a single `String`.
///
/// Line breaks are kept: the tokenizer treats them as ordinary whitespace.
pub(crate) fn read_passage<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Path of the binary word-tree cache kept next to a source file.
///
/// The name records every option that changes the tree: the step, and a
/// `.raw` marker when punctuation cleanup was skipped.
///
/// Example:
/// `data/rime.txt`, step -1 → `data/rime.step-1.bin` (or `data/rime.step-1.raw.bin`)
pub(crate) fn tree_cache_path<P: AsRef<Path>>(source: P, step: isize, raw: bool) -> io::Result<PathBuf> {
	let source = source.as_ref();
	let stem = source.file_stem().ok_or_else(|| {
		io::Error::new(io::ErrorKind::InvalidInput, format!("{} does not name a file", source.display()))
	})?;

	let mut name = stem.to_os_string();
	name.push(format!(".step{step}"));
	if raw {
		name.push(".raw");
	}
	name.push(".bin");
	Ok(source.with_file_name(name))
}
