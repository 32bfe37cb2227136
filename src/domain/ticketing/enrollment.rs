//! Event enrollment read model.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EnrollmentId, UserId};

/// A user's registration for the event. At most one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
}
