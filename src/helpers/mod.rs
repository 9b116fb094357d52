pub mod validation_helpers;
