//! Summary line output

use pgefile_core::Result;
use std::io::Write;

/// Label preceding the block count
pub const COUNT_LABEL: &str = "Num of blocks: ";

/// Render the summary line; the count is converted to decimal text here
pub fn count_line(count: usize) -> String {
    format!("{}{}", COUNT_LABEL, count)
}

/// Write the summary line and flush
pub fn write_count<W: Write>(out: &mut W, count: usize) -> Result<()> {
    writeln!(out, "{}", count_line(count))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_line() {
        assert_eq!(count_line(0), "Num of blocks: 0");
        assert_eq!(count_line(1024), "Num of blocks: 1024");
    }

    #[test]
    fn test_write_count() {
        let mut out = Vec::new();
        write_count(&mut out, 1).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Num of blocks: 1\n");
    }
}
