mod roster_component;
mod state;

pub use roster_component::RosterComponent;
pub use state::RosterTableState;
