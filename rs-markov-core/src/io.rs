use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole UTF-8 text file into memory.
///
/// Line structure is kept: newlines are ordinary whitespace to the tokenizer.
pub fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
