// Domain entities shared across services and the API layer

pub mod patient;
pub mod echo;
pub mod fietstest;
pub mod ecg;
pub mod holter;
pub mod cied;
pub mod snapshot;

pub use patient::{PatientContext, Sex};
pub use echo::EchoMeasurements;
pub use fietstest::{FietstestMeasurements, FietstestMetrics};
pub use ecg::{EcgMeasurements, EcgMetrics};
pub use holter::{HolterMeasurements, HolterMetrics};
pub use cied::{CiedReportInput, LeadMeasurements};
pub use snapshot::StudySnapshot;
