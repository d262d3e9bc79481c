use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use grider::{Grid, GridLike, Point};
use tracing::*;
use tracing_subscriber::EnvFilter;

/// Load a character grid from a text file and print a transformed copy.
#[derive(Parser, Debug)]
#[command(name = "grider", version)]
struct Args {
    /// Text file holding one grid row per line
    input: PathBuf,

    /// Mark the neighbours of ROW,COL
    #[arg(long, value_parser = parse_point)]
    mark: Option<Point>,

    /// Include diagonal neighbours when marking
    #[arg(long)]
    diagonals: bool,

    /// Character written over marked cells
    #[arg(long, default_value_t = '*')]
    marker: char,

    /// Replace every cell with a ZOOM x ZOOM block
    #[arg(long)]
    zoom: Option<usize>,

    /// Print columns as lines instead of rows
    #[arg(long)]
    columns: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let grid = Grid::from(text.replace("\r\n", "\n").as_str());
    info!(
        rows = grid.row_count(),
        columns = grid.column_count(),
        "Loaded grid"
    );

    print!("{}", render(grid, &args)?);
    Ok(())
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (row, column) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but found {value:?}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row {row:?}: {e}"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|e| format!("invalid column {column:?}: {e}"))?;
    Ok(Point::new(row, column))
}

fn render(mut grid: Grid<char>, args: &Args) -> Result<String> {
    if let Some(point) = args.mark {
        if !grid.contains(point) {
            let (rows, columns) = grid.dimensions();
            bail!("point {point} is outside the {rows}x{columns} grid");
        }
        let neighbors = if args.diagonals {
            grid.adjacent_of(point.row, point.column)
        } else {
            grid.cardinal_adjacent_of(point.row, point.column)
        };
        debug!(point = %point, marked = neighbors.len(), "Marking neighbours");
        grid.visualize(neighbors, |_| args.marker);
    }

    if let Some(zoom) = args.zoom {
        if zoom == 0 {
            bail!("zoom must be at least 1");
        }
        grid = grid
            .try_flat_map(|&c| grider::grid![[c; zoom]; zoom])
            .context("Failed to zoom grid")?;
    }

    if args.columns {
        let columns = grid.columns();
        grid = Grid::from_rows(
            columns
                .iter()
                .map(|column| {
                    (0..column.len())
                        .filter_map(|row| column.get(row))
                        .copied()
                        .collect()
                })
                .collect(),
        );
    }

    Ok(grid.to_string())
}

/// Unit tests for the command-line driver.
#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["grider", "grid.txt"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" 0 , -2 "), Ok(Point::new(0, -2)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn test_render_unchanged() {
        let grid = Grid::from("ab\ncd");
        assert_eq!(render(grid, &args(&[])).unwrap(), "ab\ncd\n");
    }

    #[test]
    fn test_render_mark_cardinal() {
        let grid = Grid::from("...\n...\n...");
        let out = render(grid, &args(&["--mark", "1,1"])).unwrap();
        assert_eq!(out, ".*.\n*.*\n.*.\n");
    }

    #[test]
    fn test_render_mark_with_diagonals() {
        let grid = Grid::from("...\n...");
        let out = render(grid, &args(&["--mark", "0,0", "--diagonals", "--marker", "o"])).unwrap();
        assert_eq!(out, ".o.\noo.\n");
    }

    #[test]
    fn test_render_mark_outside_fails() {
        let grid = Grid::from("..");
        let error = render(grid, &args(&["--mark", "4,0"])).unwrap_err();
        assert!(error.to_string().contains("outside the 1x2 grid"));
    }

    #[test]
    fn test_render_zoom_then_columns() {
        let grid = Grid::from("ab");
        let out = render(grid, &args(&["--zoom", "2", "--columns"])).unwrap();
        assert_eq!(out, "aa\naa\nbb\nbb\n");
    }

    #[test]
    fn test_render_zero_zoom_fails() {
        let grid = Grid::from("ab");
        assert!(render(grid, &args(&["--zoom", "0"])).is_err());
    }
}
