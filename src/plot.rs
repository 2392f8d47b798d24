//! The plain text stream read by the plotting front end.
//!
//! ```text
//! <algorithm name>
//! <total cost>
//! x,y            one line per terminal
//!
//! x,y            one line per optional vertex
//!
//! x1,y1;x2,y2    one line per solution edge
//!
//! ```

use std::fmt::Display;
use std::io::{self, Write};
use num_traits::Float;
use crate::{Point, Solution};

/// Writes a solution in the plottable framing: name, cost, then terminals, optional vertices
/// and edges, each section closed by a blank line.
pub fn write_plottable<W, T>(
    out: &mut W,
    name: &str,
    terminals: &[Point<T>],
    optionals: &[Point<T>],
    solution: &Solution<T>,
) -> io::Result<()>
where
    W: Write,
    T: Float + Display,
{
    writeln!(out, "{name}")?;
    writeln!(out, "{}", solution.total_cost)?;

    for terminal in terminals {
        writeln!(out, "{},{}", terminal.x, terminal.y)?;
    }
    writeln!(out)?;

    for optional in optionals {
        writeln!(out, "{},{}", optional.x, optional.y)?;
    }
    writeln!(out)?;

    for edge in &solution.edges {
        writeln!(out, "{},{};{},{}", edge.v1.x, edge.v1.y, edge.v2.x, edge.v2.y)?;
    }
    writeln!(out)
}
