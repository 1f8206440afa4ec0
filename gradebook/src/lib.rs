//! Grades a semester roster: replays it into the classroom model and reports every student's
//! grades.

pub mod report;
pub mod roster;
