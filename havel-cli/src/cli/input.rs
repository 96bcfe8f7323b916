//! Degree-sequence loading from arguments, files, and stdin.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use havel_core::DegreeSequence;

use super::commands::{CliError, InputArgs};

/// Path argument that selects stdin.
const STDIN_PATH: &str = "-";

/// Resolved origin of a degree sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum InputSource {
    /// Degrees given as positional arguments; the vertex count is implied.
    Inline(Vec<i64>),
    /// Vertex count and degrees read from stdin.
    Stdin,
    /// Vertex count and degrees read from a file.
    File(PathBuf),
}

impl InputSource {
    pub(super) fn from_args(args: &InputArgs) -> Result<Self, CliError> {
        match (&args.input, args.degrees.is_empty()) {
            (Some(_), false) => Err(CliError::Usage {
                reason: "pass degrees as arguments or via --input, not both",
            }),
            (Some(path), true) if path.as_os_str() == STDIN_PATH => Ok(Self::Stdin),
            (Some(path), true) => Ok(Self::File(path.clone())),
            (None, true) => Err(CliError::Usage {
                reason: "no degree sequence given; pass degrees as arguments or use --input",
            }),
            (None, false) => Ok(Self::Inline(args.degrees.clone())),
        }
    }

    pub(super) fn label(&self) -> SourceLabel<'_> {
        SourceLabel(self)
    }
}

/// Display adapter naming an [`InputSource`] in logs.
pub(super) struct SourceLabel<'a>(&'a InputSource);

impl fmt::Display for SourceLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            InputSource::Inline(_) => f.write_str("arguments"),
            InputSource::Stdin => f.write_str("stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub(super) fn load_sequence(source: &InputSource) -> Result<DegreeSequence, CliError> {
    match source {
        InputSource::Inline(degrees) => Ok(DegreeSequence::try_from_signed(degrees)?),
        InputSource::Stdin => parse_declared(io::stdin().lock(), Path::new(STDIN_PATH)),
        InputSource::File(path) => {
            let file = File::open(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            parse_declared(BufReader::new(file), path)
        }
    }
}

/// Parses a vertex count followed by that many degrees, separated by any
/// whitespace.
///
/// An input without any tokens is treated as an empty sequence.
pub(super) fn parse_declared(mut reader: impl BufRead, path: &Path) -> Result<DegreeSequence, CliError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let values = text
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<i64>().map_err(|_| CliError::Parse {
                position: index + 1,
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values.split_first() {
        Some((&declared, degrees)) => Ok(DegreeSequence::from_declared(declared, degrees)?),
        None => Ok(DegreeSequence::try_from_signed(&[])?),
    }
}
