//! Interactive prompts for the macro & its texts.

use std::io::{self, BufRead, Write};

use macrofill::MacroSet;


/// Print the names of all macros, with the number of their text boxes.
pub fn list_macros<W: Write>(output: &mut W, macros: &MacroSet) -> io::Result<()> {
    for (name, im) in &macros.macros {
        let count = im.text_count();
        writeln!(output, "  {} ({} text box{})", name, count, if count == 1 { "" } else { "es" })?;
    }
    Ok(())
}

/// Ask for the name of a macro until a known one is entered.
pub fn select_macro<R, W>(input: &mut R, output: &mut W, macros: &MacroSet) -> io::Result<String>
    where R: BufRead, W: Write
{
    writeln!(output, "available macros:")?;
    list_macros(output, macros)?;
    loop {
        write!(output, "select a macro: ")?;
        output.flush()?;

        let line = read_line(input)?;
        let name = line.trim();
        if macros.get(name).is_some() {
            return Ok(name.to_owned());
        }
        if !name.is_empty() {
            writeln!(output, "unknown macro `{}`", name)?;
        }
    }
}

/// Ask for given number of texts, one per line.
pub fn read_texts<R, W>(input: &mut R, output: &mut W, count: usize) -> io::Result<Vec<String>>
    where R: BufRead, W: Write
{
    let mut texts = Vec::with_capacity(count);
    for i in 1..=count {
        write!(output, "enter text {}: ", i)?;
        output.flush()?;
        let line = read_line(input)?;
        texts.push(line.trim_end_matches(&['\r', '\n'][..]).to_owned());
    }
    Ok(texts)
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no more input"));
    }
    Ok(line)
}
