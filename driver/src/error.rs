use kernel::KernelError;

/// Folds a backend client error into a kernel report, keeping the
/// backend's own message as an attachment.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
