//! Module defining the command line argument parser.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::{NAME, VERSION};
use crate::output::Target;
use super::model::Options;


impl<'a> From<&'a ArgMatches> for Options {
    fn from(matches: &'a ArgMatches) -> Self {
        let verbose_count = matches.get_count(OPT_VERBOSE) as isize;
        let quiet_count = matches.get_count(OPT_QUIET) as isize;
        let verbosity = verbose_count - quiet_count;

        let macro_name = matches.get_one::<String>(ARG_MACRO)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        let texts = matches.get_many::<String>(ARG_TEXT)
            .map(|ts| ts.cloned().collect())
            .unwrap_or_default();

        let path = |id: &str, default: &str| matches.get_one::<PathBuf>(id)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(default));
        let macros_file = path(OPT_MACROS, DEFAULT_MACROS_FILE);
        let template_directory = path(OPT_TEMPLATES, DEFAULT_TEMPLATE_DIRECTORY);
        let font_directory = path(OPT_FONTS, DEFAULT_FONT_DIRECTORY);

        // Output can be set explicitly to stdout via `-`.
        let output = matches.get_one::<String>(OPT_OUTPUT)
            .map(|o| Target::parse(o.trim()));

        Options{
            verbosity,
            macro_name, texts,
            macros_file, template_directory, font_directory,
            output,
            list: matches.get_flag(OPT_LIST),
            debug: matches.get_flag(OPT_DEBUG),
            strict: matches.get_flag(OPT_STRICT),
            jpeg_quality: matches.get_one::<u8>(OPT_JPEG_QUALITY).copied(),
        }
    }
}


// Parser definition

lazy_static! {
    static ref ABOUT: &'static str = option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("");
}

const DEFAULT_MACROS_FILE: &str = "macros.json";
const DEFAULT_TEMPLATE_DIRECTORY: &str = "templates";
const DEFAULT_FONT_DIRECTORY: &str = "fonts";

const ARG_MACRO: &str = "macro";
const ARG_TEXT: &str = "text";
const OPT_MACROS: &str = "macros";
const OPT_TEMPLATES: &str = "templates";
const OPT_FONTS: &str = "fonts";
const OPT_OUTPUT: &str = "output";
const OPT_LIST: &str = "list";
const OPT_DEBUG: &str = "debug";
const OPT_STRICT: &str = "strict";
const OPT_JPEG_QUALITY: &str = "jpeg-quality";
const OPT_VERBOSE: &str = "verbose";
const OPT_QUIET: &str = "quiet";


/// Create the parser for application's command line.
pub fn create_parser() -> Command {
    Command::new(*NAME)
        .version(*VERSION)
        .about(*ABOUT)

        // Image macro & its texts.
        .arg(Arg::new(ARG_MACRO)
            .value_name("MACRO")
            .required(false)
            .help("Name of the image macro to fill")
            .long_help(concat!(
                "Name of the image macro to fill, as defined in the macros file.\n\n",
                "If omitted, the available macros are listed and you will be asked ",
                "to pick one.")))
        .arg(Arg::new(ARG_TEXT)
            .value_name("TEXT")
            .num_args(1..)
            .help("Texts to put in the macro's boxes, in order")
            .long_help(concat!(
                "Texts to put in the macro's text boxes, in order.\n\n",
                "There must be exactly one for every box. If none are given, ",
                "you will be prompted for each of them.")))

        // Resources.
        .arg(Arg::new(OPT_MACROS)
            .long("macros").short('m')
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_MACROS_FILE)
            .help("JSON file with the image macro definitions"))
        .arg(Arg::new(OPT_TEMPLATES)
            .long("templates")
            .value_name("DIR")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_TEMPLATE_DIRECTORY)
            .help("Directory with the template images"))
        .arg(Arg::new(OPT_FONTS)
            .long("fonts")
            .value_name("DIR")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_FONT_DIRECTORY)
            .help("Directory with the fonts"))

        // Output flags.
        .arg(Arg::new(OPT_OUTPUT)
            .long("output").short('o')
            .value_name("FILE")
            .required(false)
            .help("File to write the finished image to")
            .long_help(concat!(
                "What file should the final image be written to.\n\n",
                "When this flag is set to `-` (single dash), the image is written ",
                "to standard output. By default, it goes to a timestamped PNG file ",
                "in the `out` directory. The image format follows the file extension.")))
        .arg(Arg::new(OPT_LIST)
            .long("list").short('l')
            .action(ArgAction::SetTrue)
            .help("List the available image macros and exit"))
        .arg(Arg::new(OPT_DEBUG)
            .long("debug")
            .action(ArgAction::SetTrue)
            .help("Outline the text boxes and the texts in the image"))
        .arg(Arg::new(OPT_STRICT)
            .long("strict")
            .action(ArgAction::SetTrue)
            .help("Fail when a text cannot fit its box"))
        .arg(Arg::new(OPT_JPEG_QUALITY)
            .long("jpeg-quality")
            .value_name("PERCENT")
            .value_parser(value_parser!(u8).range(1..=100))
            .help("Quality of the JPEG output"))

        // Verbosity flags.
        .arg(Arg::new(OPT_VERBOSE)
            .long("verbose").short('v')
            .action(ArgAction::Count)
            .conflicts_with(OPT_QUIET)
            .help("Increase logging verbosity"))
        .arg(Arg::new(OPT_QUIET)
            .long("quiet").short('q')
            .action(ArgAction::Count)
            .conflicts_with(OPT_VERBOSE)
            .help("Decrease logging verbosity"))
}
