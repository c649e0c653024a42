//! Normalize the capitalization of arbitrary text.
//!
//! Four schemes are supported:
//!
//! * **sentence**: the first letter of every sentence is upper case, all other letters are lower case.
//!   Sentences end with `.`, `!` or `?`.
//! * **title**: the first character of every word is upper case, the rest of the word is lower case.
//! * **upper** and **lower**: every letter is mapped to its upper or lower case form.
//!
//! Case mappings are the Unicode default ones, without any locale tailoring.
//!
//! # Usage
//!
//! Call a transformation directly:
//!
//! ```
//! assert_eq!(recase::titlecase("a taLE oF TWO cities"), "A Tale Of Two Cities");
//! ```
//!
//! Or pick the scheme at run time, by name or by value:
//!
//! ```
//! use recase::{transform, Scheme};
//!
//! assert_eq!(transform("upper", "MiXeD Case").unwrap(), "MIXED CASE");
//! assert_eq!(Scheme::Sentence.apply("hELLo world! this IS great."), "Hello world! This is great.");
//! assert!(transform("unknown", "test").is_err());
//! ```
//!
//! # Command-line interface
//!
//! This crate also provides a command-line tool, gated behind the `cli` feature.
//!
//! ```bash
//! $ cargo install recase --features cli
//! $ recase --scheme title "the cat in THE HAT"
//! The Cat In The Hat
//! $ echo "make me loud" | recase -s upper
//! MAKE ME LOUD
//! $ recase -s lower -f input.txt -o output.txt
//! ```

mod case;
mod errors;
mod io;
mod scheme;
mod tokenizer;
mod utils;

pub use crate::case::{lowercase, sentencecase, titlecase, uppercase};
pub use crate::errors::{InputError, OutputError, UnsupportedScheme};
pub use crate::io::{read_input, read_input_from, write_output, write_output_to, InputSource};
pub use crate::scheme::{transform, Scheme};
