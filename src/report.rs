//! Per-run outcome reports.

use std::fmt;
use std::time::Duration;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::core::Coords;

/// Outcome of one algorithm run over a grid.
///
/// Serialization is hand-written because JSON has no representation for
/// an infinite float: an unreachable target is emitted as the string
/// `"unreachable"` and the `path` field is omitted entirely.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Accumulated path cost at the target, infinite when unreachable
    pub total_distance: f64,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
    /// Distinct cells committed during the run
    pub checked_cells: usize,
    /// Peak size of the pending set (stack, queue or frontier)
    pub memory: usize,
    /// Source-to-target route, `None` when the target was not reached
    pub path: Option<Vec<Coords>>,
}

impl RunReport {
    /// Whether the run reached the target
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.total_distance.is_finite()
    }
}

impl Serialize for RunReport {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = 4 + usize::from(self.path.is_some());
        let mut s = serializer.serialize_struct("RunReport", fields)?;
        if self.total_distance.is_finite() {
            s.serialize_field("total_distance", &self.total_distance)?;
        } else {
            s.serialize_field("total_distance", "unreachable")?;
        }
        s.serialize_field("time", &self.elapsed.as_secs_f64())?;
        s.serialize_field("checked_cells_no", &self.checked_cells)?;
        s.serialize_field("memory", &self.memory)?;
        if let Some(path) = &self.path {
            s.serialize_field("path", path)?;
        }
        s.end()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_distance.is_infinite() {
            writeln!(f, "total distance: Not Reachable")?;
        } else if self.total_distance.fract() == 0.0 {
            writeln!(f, "total distance: {}", self.total_distance as i64)?;
        } else {
            writeln!(f, "total distance: {}", self.total_distance)?;
        }
        writeln!(f, "time:           {:.9}s", self.elapsed.as_secs_f64())?;
        writeln!(f, "checked cells:  {}", self.checked_cells)?;
        write!(f, "memory:         {}", self.memory)?;
        if let Some(path) = &self.path {
            write!(f, "\npath:           ")?;
            for (i, coords) in path.iter().enumerate() {
                if i > 0 {
                    write!(f, " -> ")?;
                }
                write!(f, "{coords}")?;
            }
        }
        Ok(())
    }
}
