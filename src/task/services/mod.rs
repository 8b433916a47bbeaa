//! Application services for task orchestration.

mod lifecycle;

pub use lifecycle::{
    ChangeTaskStatusRequest, CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService,
};
