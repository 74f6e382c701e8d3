use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::constants::REPORT_RULER_WIDTH;

/// Write a captured tool report with a header identifying the source image
/// and offset, followed by a ruler line and the raw tool output.
pub fn write_report(
    dest: &Path,
    title: &str,
    image: &Path,
    offset: Option<u64>,
    body: &[u8],
) -> io::Result<()> {
    let file = File::create(dest)?;
    let mut writer = BufWriter::new(file);

    match offset {
        Some(offset) => writeln!(writer, "{} for {} (offset: {})", title, image.display(), offset)?,
        None => writeln!(writer, "{} for {}", title, image.display())?,
    }
    writeln!(writer, "{}", "=".repeat(REPORT_RULER_WIDTH))?;
    writer.write_all(body)?;
    writer.flush()
}
