//! Candidate-name pool for player generation.
//!
//! Backed by a plain newline-delimited text file, one candidate name per
//! line. Names are drawn uniformly at random and removed, so no two
//! generated players share a name within a run.

use crate::error::{CoreError, Result};
use rand::Rng;
use std::fs;
use std::path::Path;

/// Ordered, mutable pool of remaining candidate names.
#[derive(Debug, Clone)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    /// Build a pool from an in-memory name list.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load a pool from a newline-delimited name file.
    ///
    /// Blank lines (including a trailing-newline artifact) are skipped so
    /// they never become player names. A missing or unreadable file is a
    /// fatal startup error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let names = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self { names })
    }

    /// Remove and return a uniformly random remaining name.
    ///
    /// Fails once the pool is empty; generation has no synthetic-name
    /// fallback.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Result<String> {
        if self.names.is_empty() {
            return Err(CoreError::NamePoolExhausted);
        }
        let idx = rng.gen_range(0..self.names.len());
        Ok(self.names.swap_remove(idx))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_skips_blank_lines() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Alpha One")?;
        writeln!(file)?;
        writeln!(file, "  Bravo Two  ")?;
        writeln!(file, "Charlie Three")?;

        let pool = NamePool::load(file.path())?;
        assert_eq!(pool.len(), 3);
        Ok(())
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let err = NamePool::load(Path::new("no/such/names.txt")).unwrap_err();
        assert!(matches!(err, CoreError::IoError(_)));
    }

    #[test]
    fn draw_removes_names_until_exhaustion() -> Result<()> {
        let mut pool = NamePool::new(vec!["A".to_string(), "B".to_string(), "C".to_string()]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let mut drawn = Vec::new();
        for _ in 0..3 {
            drawn.push(pool.draw(&mut rng)?);
        }
        assert!(pool.is_empty());

        drawn.sort();
        assert_eq!(drawn, ["A", "B", "C"]);
        assert!(matches!(
            pool.draw(&mut rng),
            Err(CoreError::NamePoolExhausted)
        ));
        Ok(())
    }
}
