// Profiles: form validation, persistence, and the results/report endpoints.
// Recommendation logic lives in `recommendation`; this module only wires it
// to storage and HTTP.

pub mod handlers;
pub mod repository;
pub mod validation;
