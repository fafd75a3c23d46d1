pub mod drift_field;
