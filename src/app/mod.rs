pub mod batch;

pub use batch::{BatchRecord, BatchRunner, BatchSummary, Operation, OperationKind};
