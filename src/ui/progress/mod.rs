// Fri Oct 16 2026 - Alex

pub mod spinner;

pub use spinner::ProgressSpinner;
