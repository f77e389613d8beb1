//! Module for handling command line arguments.

mod model;
mod parser;


use std::env;
use std::ffi::OsString;

pub use self::model::{ArgsError, Options};
use self::parser::create_parser;


/// Parse command line arguments and return `Options` object.
#[inline]
pub fn parse() -> Result<Options, ArgsError> {
    parse_from_argv(env::args_os())
}

/// Parse application options from given array of arguments
/// (*all* arguments, including binary name).
#[inline]
pub fn parse_from_argv<I, T>(argv: I) -> Result<Options, ArgsError>
    where I: IntoIterator<Item=T>, T: Clone + Into<OsString>
{
    let parser = create_parser();
    let matches = parser.try_get_matches_from(argv)?;
    Ok(Options::from(&matches))
}


#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use speculoos::prelude::*;
    use crate::NAME;
    use crate::output::Target;
    use super::{parse_from_argv, ArgsError};

    #[test]
    fn no_args() {
        let opts = parse_from_argv(vec![*NAME]).unwrap();
        assert_eq!(None, opts.macro_name);
        assert!(opts.texts.is_empty());
        assert_eq!(0, opts.verbosity);
        assert_eq!(None, opts.output);
        assert!(!opts.list);
        assert!(!opts.debug);
        assert!(!opts.strict);
        assert_eq!(None, opts.jpeg_quality);
    }

    #[test]
    fn default_paths() {
        let opts = parse_from_argv(vec![*NAME]).unwrap();
        assert_eq!(PathBuf::from("macros.json"), opts.macros_file);
        assert_eq!(PathBuf::from("templates"), opts.template_directory);
        assert_eq!(PathBuf::from("fonts"), opts.font_directory);
    }

    #[test]
    fn custom_paths() {
        let opts = parse_from_argv(vec![*NAME,
            "-m", "data/memes.json", "--templates", "data/img", "--fonts", "/usr/share/fonts",
        ]).unwrap();
        assert_eq!(PathBuf::from("data/memes.json"), opts.macros_file);
        assert_eq!(PathBuf::from("data/img"), opts.template_directory);
        assert_eq!(PathBuf::from("/usr/share/fonts"), opts.font_directory);
    }

    #[test]
    fn macro_without_texts() {
        let opts = parse_from_argv(vec![*NAME, "drake"]).unwrap();
        assert_eq!(Some("drake"), opts.macro_name.as_deref());
        assert!(opts.texts.is_empty());
    }

    #[test]
    fn macro_with_texts() {
        let opts = parse_from_argv(vec![*NAME, "drake", "Writing tests", ""]).unwrap();
        assert_eq!(Some("drake"), opts.macro_name.as_deref());
        assert_eq!(vec!["Writing tests".to_owned(), "".to_owned()], opts.texts);
    }

    #[test]
    fn output() {
        let opts = parse_from_argv(vec![*NAME, "-o", "-", "drake"]).unwrap();
        assert_eq!(Some(Target::Stdout), opts.output);

        let opts = parse_from_argv(vec![*NAME, "drake", "--output", "meme.jpg"]).unwrap();
        assert_eq!(Some(Target::File(PathBuf::from("meme.jpg"))), opts.output);
    }

    #[test]
    fn flags() {
        let opts = parse_from_argv(vec![*NAME, "--debug", "--strict", "-l"]).unwrap();
        assert!(opts.debug);
        assert!(opts.strict);
        assert!(opts.list);
    }

    #[test]
    fn jpeg_quality() {
        let opts = parse_from_argv(vec![*NAME, "--jpeg-quality", "70"]).unwrap();
        assert_eq!(Some(70), opts.jpeg_quality);
        assert_that!(parse_from_argv(vec![*NAME, "--jpeg-quality", "101"])).is_err();
        assert_that!(parse_from_argv(vec![*NAME, "--jpeg-quality", "high"])).is_err();
    }

    #[test]
    fn verbosity() {
        let opts = parse_from_argv(vec![*NAME, "-vv"]).unwrap();
        assert_eq!(2, opts.verbosity);
        assert!(opts.verbose());
        let opts = parse_from_argv(vec![*NAME, "-q"]).unwrap();
        assert_eq!(-1, opts.verbosity);
        assert!(opts.quiet());
        match parse_from_argv(vec![*NAME, "-v", "-q"]) {
            Err(ArgsError::Parse(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unknown_flag() {
        assert_that!(parse_from_argv(vec![*NAME, "--frobnicate"])).is_err();
    }
}
