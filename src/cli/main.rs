//!
//! macrofill -- Image macros from the shell
//!

             extern crate clap;
             extern crate exitcode;
#[macro_use] extern crate lazy_static;
             extern crate macrofill;
             extern crate serde_json;
#[macro_use] extern crate slog;
             extern crate slog_envlogger;
             extern crate slog_scope;
             extern crate slog_stdlog;
             extern crate slog_term;
             extern crate thiserror;
             extern crate time;

// `log` must be at the end of these declarations because we want to simultaneously:
// * use the standard `log` macros (which would be shadowed by `slog`)
// * be able to initialize the slog logger using slog macros like o!()
#[macro_use] extern crate log;

#[cfg(test)] #[macro_use] extern crate speculoos;


mod args;
mod error;
mod logging;
mod output;
mod prompt;


use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::process::exit;

use clap::error::ErrorKind;
use macrofill::{Engine, EngineBuilder, ImageFormat, MacroSet};

use crate::args::{ArgsError, Options};
use crate::error::AppError;
use crate::output::Target;


lazy_static! {
    /// Application / package name, as filled out by Cargo.
    static ref NAME: &'static str = option_env!("CARGO_PKG_NAME").unwrap_or("macrofill");

    /// Application version, as filled out by Cargo.
    static ref VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
}


fn main() {
    let opts = args::parse().unwrap_or_else(|e| {
        let code = print_args_error(e);
        exit(code);
    });

    let _guard = logging::init(opts.verbosity).unwrap_or_else(|e| {
        let _ = writeln!(&mut io::stderr(), "Failed to initialize logging: {}", e);
        exit(exitcode::SOFTWARE);
    });
    if cfg!(debug_assertions) {
        warn!("Debug mode! The program will likely be much slower.");
    }
    for (i, arg) in env::args().enumerate() {
        debug!("argv[{}] = {:?}", i, arg);
    }
    trace!("Options parsed from argv:\n{:#?}", opts);

    if let Err(e) = run(opts) {
        error!("{}", e);
        exit(e.exit_code());
    }
}

/// Print an error that may occur while parsing arguments
/// and return the code to exit with.
fn print_args_error(e: ArgsError) -> exitcode::ExitCode {
    match e {
        // Help & version requests are reported by clap as errors, too.
        ArgsError::Parse(ref e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exitcode::OK,
                _ => exitcode::USAGE,
            }
        }
    }
}


/// Run the program with given options.
fn run(opts: Options) -> Result<(), AppError> {
    let macros = load_macros(&opts.macros_file)?;
    if opts.list {
        let stdout = io::stdout();
        return prompt::list_macros(&mut stdout.lock(), &macros).map_err(AppError::Input);
    }
    if macros.is_empty() {
        return Err(AppError::NoMacros(opts.macros_file));
    }

    // Prompts go to stderr, so that they don't mix with the image on stdout.
    let name = match opts.macro_name {
        Some(ref name) => name.clone(),
        None => {
            let stdin = io::stdin();
            prompt::select_macro(&mut stdin.lock(), &mut io::stderr(), &macros)
                .map_err(AppError::Input)?
        }
    };
    let image_macro = macros.get(&name)
        .ok_or_else(|| AppError::UnknownMacro(name.clone()))?;
    debug!("Filling image macro `{}` with {} text box(es)", name, image_macro.text_count());

    let texts = if opts.texts.is_empty() && image_macro.text_count() > 0 {
        let stdin = io::stdin();
        prompt::read_texts(&mut stdin.lock(), &mut io::stderr(), image_macro.text_count())
            .map_err(AppError::Input)?
    } else {
        opts.texts.clone()
    };

    let target = match opts.output {
        Some(ref target) => target.clone(),
        None => Target::default_for(&name)?,
    };
    let format = target.format();
    if let Target::File(ref path) = target {
        if format.is_none() {
            warn!("Unrecognized image extension of {}, using the template's format",
                path.display());
        }
    }

    let engine = create_engine(&opts, &macros, format)?;
    let output = engine.fill(image_macro, &texts)?;

    trace!("Writing {} bytes to {}...", output.len(), target);
    target.write(output.bytes()).map_err(|e| AppError::Output(target.to_string(), e))?;
    info!("Image macro `{}` written to {}", name, target);
    Ok(())
}

/// Load the macro definitions from given JSON file.
fn load_macros(path: &Path) -> Result<MacroSet, AppError> {
    trace!("Loading macro definitions from {}...", path.display());
    let file = File::open(path).map_err(|e| AppError::MacrosFile(path.to_owned(), e))?;
    let macros: MacroSet = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::MacrosJson(path.to_owned(), e))?;
    debug!("Loaded {} image macro(s) from {}", macros.len(), path.display());
    Ok(macros)
}

/// Create the fill engine as configured by the options.
fn create_engine(opts: &Options,
                 macros: &MacroSet,
                 format: Option<ImageFormat>) -> Result<Engine, AppError> {
    let mut builder = EngineBuilder::new()
        .template_directory(&opts.template_directory)
        .font_directory(&opts.font_directory)
        .global_style(macros.style.clone())
        .debug(opts.debug)
        .strict_fit(opts.strict);
    if let Some(quality) = opts.jpeg_quality {
        builder = builder.jpeg_quality(quality);
    }
    if let Some(format) = format {
        builder = builder.output_format(format);
    }
    Ok(builder.build()?)
}
