use serde::{Deserialize, Serialize};

/// Rent standing for a tenant in the current month.
///
/// `Due` is reserved for a not-yet-overdue window and is currently never
/// derived; only `Paid` and `Overdue` are produced.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum RentStatus {
    Paid,
    Due,
    Overdue,
}
