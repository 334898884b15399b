use label_kernel::{Kernel, KernelIntrospect};

/// A kernel session usable for both construction and queries.
///
/// Operations take `&mut dyn KernelBundle` and reach the read-only side through
/// [`as_introspect`](KernelBundle::as_introspect) between mutating calls.
pub trait KernelBundle: Kernel + KernelIntrospect {
    fn as_introspect(&self) -> &dyn KernelIntrospect;
}

impl<T: Kernel + KernelIntrospect> KernelBundle for T {
    fn as_introspect(&self) -> &dyn KernelIntrospect {
        self
    }
}
