//! Loader for the problem description file.
//!
//! ```text
//! <rows>, <cols>
//! ----
//! <row>, <col>, <value>
//! ...
//! ----
//! <terminate>
//! <max iterations>
//! <cyclic, 0 or 1>
//! ```
//!
//! Blank lines are skipped, whitespace around commas is ignored,
//! and the three trailing parameters may share lines.

use crate::domain::*;
use crate::solver::SolverConfig;
use crate::util::*;
use std::collections::TryReserveError;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

const SEPARATOR: &str = "----";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: expected grid size `<rows>, <cols>`")]
    MalformedDimensions { line: usize },

    #[error("grid size {rows}x{cols} must be at least 1x1")]
    InvalidDimensions { rows: i64, cols: i64 },

    #[error("line {line}: expected separator `----`")]
    MissingSeparator { line: usize },

    #[error("line {line}: expected source `<row>, <col>, <value>`")]
    MalformedSource { line: usize },

    #[error("line {line}: {source}")]
    SourceOutOfBoard {
        line: usize,
        #[source]
        source: OutOfBoard,
    },

    #[error("line {line}: expected a real termination threshold")]
    MalformedTerminate { line: usize },

    #[error("termination threshold {value} must not be negative")]
    NegativeTerminate { value: f64 },

    #[error("line {line}: expected a non-negative iteration count")]
    MalformedIterations { line: usize },

    #[error("line {line}: expected cyclic flag 0 or 1")]
    MalformedCyclic { line: usize },

    #[error("line {line}: unexpected trailing input")]
    TrailingInput { line: usize },

    #[error("could not allocate grid: {0}")]
    Allocation(#[from] TryReserveError),
}

/// A validated problem: grid size, sources, and solver controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    bounds: AABB<2>,
    sources: Vec<SourcePoint>,
    config: SolverConfig,
}

impl Problem {
    pub fn new(
        rows: i64,
        cols: i64,
        sources: Vec<SourcePoint>,
        config: SolverConfig,
    ) -> Result<Self, LoadError> {
        let bounds = grid_bounds(rows, cols)?;
        for point in &sources {
            check_source(&bounds, point, 0)?;
        }
        check_terminate(config.terminate, 0)?;
        Ok(Problem {
            bounds,
            sources,
            config,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut lines = ContentLines::new(reader);

        let (line, text) = lines.require("grid size")?;
        let (rows, cols) = parse_dimensions(&text)
            .ok_or(LoadError::MalformedDimensions { line })?;
        let bounds = grid_bounds(rows, cols)?;
        log::debug!("grid {bounds}");

        let (line, text) = lines.require("separator")?;
        if text != SEPARATOR {
            return Err(LoadError::MissingSeparator { line });
        }

        let mut sources = Vec::new();
        loop {
            let (line, text) = lines.require("separator")?;
            if text == SEPARATOR {
                break;
            }
            let point =
                parse_source(&text).ok_or(LoadError::MalformedSource { line })?;
            check_source(&bounds, &point, line)?;
            sources.push(point);
        }
        log::debug!("{} source points", sources.len());

        let mut tokens = lines.tokens()?.into_iter();

        let (line, token) = tokens.next().ok_or(LoadError::UnexpectedEof {
            expected: "termination threshold",
        })?;
        let terminate = token
            .parse::<f64>()
            .map_err(|_| LoadError::MalformedTerminate { line })?;
        check_terminate(terminate, line)?;

        let (line, token) = tokens.next().ok_or(LoadError::UnexpectedEof {
            expected: "iteration count",
        })?;
        let max_iterations = token
            .parse::<usize>()
            .map_err(|_| LoadError::MalformedIterations { line })?;

        let (line, token) = tokens.next().ok_or(LoadError::UnexpectedEof {
            expected: "cyclic flag",
        })?;
        let cyclic = match token.as_str() {
            "0" => false,
            "1" => true,
            _ => return Err(LoadError::MalformedCyclic { line }),
        };

        if let Some((line, _)) = tokens.next() {
            return Err(LoadError::TrailingInput { line });
        }

        Ok(Problem {
            bounds,
            sources,
            config: SolverConfig {
                terminate,
                max_iterations,
                cyclic,
            },
        })
    }

    pub fn bounds(&self) -> &AABB<2> {
        &self.bounds
    }

    pub fn rows(&self) -> usize {
        self.bounds.exclusive_bounds()[0] as usize
    }

    pub fn cols(&self) -> usize {
        self.bounds.exclusive_bounds()[1] as usize
    }

    pub fn sources(&self) -> &[SourcePoint] {
        &self.sources
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Fails only if the per-cell index cannot be allocated.
    pub fn source_set(&self) -> Result<SourceSet, LoadError> {
        SourceSet::new(self.bounds, &self.sources).map_err(|e| match e {
            SourceError::OutOfBoard(source) => {
                LoadError::SourceOutOfBoard { line: 0, source }
            }
            SourceError::Allocation(e) => LoadError::Allocation(e),
        })
    }

    /// Zero grid with every source applied in file order.
    pub fn initial_grid(&self) -> Result<Grid<2>, LoadError> {
        let mut grid = Grid::try_new(self.bounds)?;
        for point in &self.sources {
            grid.set(&point.coord(), point.value);
        }
        Ok(grid)
    }
}

impl FromStr for Problem {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

fn grid_bounds(rows: i64, cols: i64) -> Result<AABB<2>, LoadError> {
    let valid = 1..=i64::from(i32::MAX);
    if !valid.contains(&rows) || !valid.contains(&cols) {
        return Err(LoadError::InvalidDimensions { rows, cols });
    }
    Ok(AABB::from_sizes(&vector![rows as i32, cols as i32]))
}

/// `line` is 0 for problems built in code.
fn check_source(
    bounds: &AABB<2>,
    point: &SourcePoint,
    line: usize,
) -> Result<(), LoadError> {
    if !point.value.is_finite() {
        return Err(LoadError::MalformedSource { line });
    }
    if !bounds.contains(&point.coord()) {
        return Err(LoadError::SourceOutOfBoard {
            line,
            source: OutOfBoard {
                row: point.row,
                col: point.col,
                bounds: *bounds,
            },
        });
    }
    Ok(())
}

fn check_terminate(value: f64, line: usize) -> Result<(), LoadError> {
    if !value.is_finite() {
        return Err(LoadError::MalformedTerminate { line });
    }
    if value < 0.0 {
        return Err(LoadError::NegativeTerminate { value });
    }
    Ok(())
}

fn split_fields<const N: usize>(text: &str) -> Option<[&str; N]> {
    let mut fields = text.split(',').map(str::trim);
    let result: [&str; N] = std::array::from_fn(|_| fields.next().unwrap_or(""));
    if fields.next().is_some() || result.iter().any(|f| f.is_empty()) {
        return None;
    }
    Some(result)
}

fn parse_dimensions(text: &str) -> Option<(i64, i64)> {
    let [rows, cols] = split_fields::<2>(text)?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}

fn parse_source(text: &str) -> Option<SourcePoint> {
    let [row, col, value] = split_fields::<3>(text)?;
    Some(SourcePoint::new(
        row.parse().ok()?,
        col.parse().ok()?,
        value.parse().ok()?,
    ))
}

/// Non-blank, trimmed lines with 1-based line numbers.
struct ContentLines<R> {
    inner: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> ContentLines<R> {
    fn new(reader: R) -> Self {
        ContentLines {
            inner: reader.lines(),
            line: 0,
        }
    }

    fn next_content(&mut self) -> Result<Option<(usize, String)>, LoadError> {
        for text in self.inner.by_ref() {
            self.line += 1;
            let text = text?;
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Ok(Some((self.line, trimmed.to_owned())));
            }
        }
        Ok(None)
    }

    fn require(
        &mut self,
        expected: &'static str,
    ) -> Result<(usize, String), LoadError> {
        self.next_content()?
            .ok_or(LoadError::UnexpectedEof { expected })
    }

    /// Remaining input split on whitespace.
    fn tokens(&mut self) -> Result<Vec<(usize, String)>, LoadError> {
        let mut result = Vec::new();
        while let Some((line, text)) = self.next_content()? {
            result.extend(
                text.split_whitespace().map(|t| (line, t.to_owned())),
            );
        }
        Ok(result)
    }
}
