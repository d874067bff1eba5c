use tracing::info;

use crate::error::Result;
use crate::ingest::{parse_chairs_csv, parse_estates_csv};

use super::Isuumo;

impl Isuumo {
    /// Bulk-loads chairs from a headerless CSV. Nothing is stored if any row
    /// is malformed.
    pub fn ingest_chairs_csv(&self, csv: &[u8]) -> Result<usize> {
        let chairs = parse_chairs_csv(csv)?;
        let inserted = self.state.insert_chairs(&chairs)?;
        info!(inserted, "chairs ingested");
        Ok(inserted)
    }

    /// Bulk-loads estates and drops every cached recommendation before
    /// returning.
    pub fn ingest_estates_csv(&self, csv: &[u8]) -> Result<usize> {
        let estates = parse_estates_csv(csv)?;
        let inserted = self.state.insert_estates(&estates)?;
        self.recommendations.invalidate_all()?;
        info!(inserted, "estates ingested");
        Ok(inserted)
    }
}
