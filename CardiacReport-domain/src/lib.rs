// CardiacReport Domain
// This crate contains the business logic for the CardiacReport application

// Measurement and report entities
pub mod entities;

// Clinical calculations and classification thresholds
pub mod calculations;

// Report builders and the study service
pub mod services;

// Clinical scenario (beleid) catalog
pub mod scenarios;

// PDF ingestion with OCR fallback
pub mod pdf_ingest;

// Bearer-token authentication middleware
pub mod auth;

// Re-export the database module from the data crate for convenience
pub use cardiac_report_data::database;
