//! The computed history of the system and its playback state.
//!
//! Snapshots are append-only: index 0 is the initial condition and each
//! integration step appends one more. A cursor selects the snapshot shown
//! to hosts, a signed playback speed advances it with wrap-around, and a
//! rollback slot keeps the previous history while a bulk computation is in
//! flight so cancel can restore it exactly.

use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::forces::AccelSet;
use crate::simulation::states::{Body, Snapshot};

#[derive(Debug, Clone)]
struct Rollback {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

#[derive(Debug)]
pub struct Timeline {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    playback_speed: i32,
    paused: bool,
    /// Populated exactly while a bulk computation is in flight.
    rollback: Option<Rollback>,
    /// 0 selects the world origin, k > 0 selects body k - 1.
    focus: usize,
}

impl Timeline {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            playback_speed: 1,
            paused: true,
            rollback: None,
            focus: 0,
        }
    }

    /// Replace the whole history with a single initial snapshot.
    pub fn reset(&mut self, initial: Snapshot) {
        self.snapshots = vec![initial];
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    pub fn playback_speed(&self) -> i32 {
        self.playback_speed
    }

    /// Snapshots advanced per playback tick; negative plays backward.
    pub fn set_playback_speed(&mut self, speed: i32) {
        self.playback_speed = speed;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Select the body positions are offset against: 0 for the world
    /// origin, k > 0 for body k - 1. Stored positions are never mutated.
    pub fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    /// Mutable access to a body of the current snapshot for direct edits.
    /// Editing while playing forces the timeline into a paused state so the
    /// edit is not swept past on the next playback tick.
    pub fn edit_body(&mut self, index: usize) -> Option<&mut Body> {
        self.paused = true;
        self.snapshots[self.cursor].bodies.get_mut(index)
    }

    /// Save the current history into the rollback slot and restart from
    /// the cursor snapshot, so the bulk run begins at "now".
    pub fn begin_bulk_compute(&mut self) {
        let current = self.current().clone();
        let snapshots = std::mem::take(&mut self.snapshots);
        self.rollback = Some(Rollback {
            snapshots,
            cursor: self.cursor,
        });
        self.snapshots = vec![current];
        self.cursor = 0;
    }

    pub fn bulk_compute_active(&self) -> bool {
        self.rollback.is_some()
    }

    /// Integrate one step from the cursor snapshot, append the result and
    /// move the cursor onto it. A zero timestep is a silent no-op with
    /// nothing appended.
    pub fn advance_one_step(&mut self, engine: &Engine, forces: &AccelSet) -> Result<(), SimError> {
        if engine.timestep.base_value() == 0.0 {
            return Ok(());
        }
        let next = engine.step(self.current(), forces)?;
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;
        Ok(())
    }

    /// Drop the rollback slot once a bulk computation has covered its
    /// requested steps.
    pub fn finish_bulk_compute(&mut self) {
        self.rollback = None;
    }

    /// Restore the history and cursor saved at `begin_bulk_compute`,
    /// discarding everything computed since. Callable at any point during
    /// a bulk run; a silent no-op when there is nothing to cancel.
    pub fn cancel_bulk_compute(&mut self) {
        if let Some(rollback) = self.rollback.take() {
            self.snapshots = rollback.snapshots;
            self.cursor = rollback.cursor;
        }
    }

    /// Move the cursor, clamping into the valid snapshot range.
    pub fn scrub_to(&mut self, index: isize) {
        let last = self.snapshots.len() as isize - 1;
        self.cursor = index.clamp(0, last) as usize;
    }

    /// Advance the cursor by the playback speed. Running past either end
    /// wraps to the opposite one; looping playback, not an error.
    pub fn advance_playback(&mut self) {
        let last = self.snapshots.len() as i64 - 1;
        let next = self.cursor as i64 + self.playback_speed as i64;
        if next > last {
            self.cursor = 0;
        } else if next < 0 {
            self.cursor = last as usize;
        } else {
            self.cursor = next as usize;
        }
    }

    /// Change a body's mass display unit across the entire history, so
    /// scrubbing shows one consistent unit choice.
    pub fn convert_mass_units(&mut self, body: usize, unit: usize) {
        for snapshot in &mut self.snapshots {
            if let Some(body) = snapshot.bodies.get_mut(body) {
                body.mass.convert_to_units(unit);
            }
        }
    }

    /// Change a body's position display unit across the entire history.
    pub fn convert_position_units(&mut self, body: usize, unit: usize) {
        for snapshot in &mut self.snapshots {
            if let Some(body) = snapshot.bodies.get_mut(body) {
                body.position.convert_to_units(unit);
            }
        }
    }

    /// Change a body's velocity display unit across the entire history.
    pub fn convert_velocity_units(&mut self, body: usize, unit: usize) {
        for snapshot in &mut self.snapshots {
            if let Some(body) = snapshot.bodies.get_mut(body) {
                body.velocity.convert_to_units(unit);
            }
        }
    }
}
