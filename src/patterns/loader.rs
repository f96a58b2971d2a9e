use regex::Regex;

use crate::core::error::{JsEndpointsError, Result};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered, compiled regular expressions read from a pattern source.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Load one pattern per line from the file at `path`.
    ///
    /// Whitespace-only lines are skipped. The first line that fails to compile
    /// aborts the load with [`JsEndpointsError::PatternSyntax`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Same as [`PatternSet::load`] for any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut patterns = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let regex = Regex::new(&line).map_err(|source| JsEndpointsError::PatternSyntax {
                line_number: index + 1,
                pattern: line.clone(),
                source,
            })?;
            patterns.push(regex);
        }

        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Regex> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Regex;
    type IntoIter = std::slice::Iter<'a, Regex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
