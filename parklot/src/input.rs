//! Origin prompt: 1-based row/column in, validated 0-based [`Point`] out.

use std::io::{self, BufRead, Write};

use parkgrid_core::Point;

/// Prompt for a 1-based (row, column) starting location and convert it to
/// a 0-based [`Point`].
///
/// Re-prompts on non-numeric input and on coordinates outside `[1, size]`,
/// so the returned point is always inside the lot. Errors only on I/O
/// failure, including end of input.
pub fn read_origin(mut input: impl BufRead, mut out: impl Write, size: i32) -> io::Result<Point> {
    loop {
        let Some(row) = prompt_number(
            &mut input,
            &mut out,
            &format!("Enter the row of your starting location (1-{size}): "),
        )?
        else {
            writeln!(out, "Invalid coordinates! Please try again.")?;
            continue;
        };
        let Some(col) = prompt_number(
            &mut input,
            &mut out,
            &format!("Enter the column of your starting location (1-{size}): "),
        )?
        else {
            writeln!(out, "Invalid coordinates! Please try again.")?;
            continue;
        };

        if (1..=size).contains(&row) && (1..=size).contains(&col) {
            return Ok(Point::new(col - 1, row - 1));
        }
        writeln!(out, "Invalid coordinates! Please try again.")?;
    }
}

/// Print a prompt and parse one line as `i32`. `Ok(None)` on parse failure.
fn prompt_number(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<i32>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a starting location was given",
        ));
    }
    Ok(line.trim().parse().ok())
}
