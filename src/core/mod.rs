mod input_adapter;
mod input_snapshot;

pub use input_adapter::WinitController;
pub use input_snapshot::InputSnapshot;
