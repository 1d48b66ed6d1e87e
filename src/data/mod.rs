//! Data loading and external game content
//!
//! Move definitions and engine tuning, loaded from RON files so content can
//! be edited without a rebuild.

pub mod loader;
pub mod moves;

pub use loader::{export_default_data, export_default_moves, load_ron, write_ron, DataManager, DATA_DIR};
pub use moves::{default_move_catalog, MoveCatalog, MoveDef};
