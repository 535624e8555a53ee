//! Drawing routines for each asset family.
//!
//! Every module exposes a pure `render` function mapping parameters to a
//! finished canvas; saving is the catalog driver's job.

pub mod characters;
pub mod draw;
pub mod effects;
pub mod items;
pub mod skills;
pub mod tiles;
pub mod ui;
