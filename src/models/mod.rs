//! Domain types for the dashboard state tree.
//!
//! Every record carries a stable `id`; the state container matches on
//! ids for edit/delete and treats the rest of each record as opaque.

pub mod alert;
pub mod condition;
pub mod enums;
pub mod lab;
pub mod medication;
pub mod procedure;
pub mod profile;
pub mod provider;
pub mod request;
pub mod vital_sign;

pub use alert::Alert;
pub use condition::Condition;
pub use enums::{
    AbnormalFlag, AlertKind, AlertStatus, ConditionStatus, MedicationStatus, RequestStatus, Theme,
};
pub use lab::LabResult;
pub use medication::Medication;
pub use procedure::Procedure;
pub use profile::UserProfile;
pub use provider::{Facility, Provider};
pub use request::RequestBatch;
pub use vital_sign::{VitalSign, VitalType};

use uuid::Uuid;

/// Records the container can match by id for edit/delete transitions.
pub trait Identified {
    fn record_id(&self) -> Uuid;
}

macro_rules! identified {
    ($($ty:ty),+ $(,)?) => {
        $(impl Identified for $ty {
            fn record_id(&self) -> Uuid {
                self.id
            }
        })+
    };
}

identified!(
    Alert,
    Condition,
    Facility,
    LabResult,
    Medication,
    Procedure,
    Provider,
    RequestBatch,
    VitalSign,
);
