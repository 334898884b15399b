use label_kernel::KernelSolidHandle;

/// Complete result of a modeling operation.
#[derive(Debug, Clone)]
pub struct OpResult {
    /// Handle to the solid produced by the operation. Runtime-only.
    pub handle: KernelSolidHandle,
    pub diagnostics: Diagnostics,
}

/// Timing information from an operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    /// Time taken for the kernel operation, in milliseconds.
    pub kernel_time_ms: f64,
}

/// Errors from modeling operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OpError {
    #[error("kernel error: {0}")]
    Kernel(#[from] label_kernel::KernelError),

    #[error("no edges selected for operation")]
    NoEdges,

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
}
