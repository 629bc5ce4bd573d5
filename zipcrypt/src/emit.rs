use std::io::Write;

use crate::{table, Error, Style, TABLE_LEN};

const VALUES_PER_ROW: usize = 8;

/// Writes every table entry, in index order, as two-hex-digit literals,
/// eight per row. `Plain` emits the bare rows; `C` and `Rust` wrap them in
/// a complete array declaration.
pub fn write_table<W: Write>(writer: &mut W, style: Style) -> Result<(), Error> {
    let indent = match style {
        Style::Plain => "",
        Style::C | Style::Rust => "    ",
    };
    match style {
        Style::Plain => {}
        Style::C => writeln!(writer, "static const uint8_t keystream_tab[{TABLE_LEN}] = {{")?,
        Style::Rust => writeln!(writer, "pub static KEYSTREAM_TAB: [u8; {TABLE_LEN}] = [")?,
    }
    for row in table().chunks(VALUES_PER_ROW) {
        write!(writer, "{indent}")?;
        for (i, byte) in row.iter().enumerate() {
            if i + 1 == row.len() {
                writeln!(writer, "0x{byte:02x},")?;
            } else {
                write!(writer, "0x{byte:02x}, ")?;
            }
        }
    }
    match style {
        Style::Plain => {}
        Style::C => writeln!(writer, "}};")?,
        Style::Rust => writeln!(writer, "];")?,
    }
    Ok(())
}
