use jiff::Timestamp;
use log::debug;

use super::{finish, Edit};
use crate::models::Plan;

impl Plan {
    /// Strips every completed task down to id, title, status and
    /// `tracking.completed_at`. The outcome is the number of tasks changed.
    pub fn compact(&self, now: Timestamp) -> Edit<usize> {
        let mut plan = self.clone();
        let compacted = plan
            .phases
            .iter_mut()
            .flat_map(|phase| phase.tasks.iter_mut())
            .map(|task| task.compact())
            .filter(|changed| *changed)
            .count();

        debug!("Compacted {compacted} completed tasks");
        finish(plan, compacted, now)
    }
}
