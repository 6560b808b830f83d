// Career recommendation: fixed catalog, keyword scorer, roadmap templates,
// and the remote service client with heuristic fallback.
// The scorer and roadmap selector are pure; only `remote` does I/O.

pub mod catalog;
pub mod handlers;
pub mod recommender;
pub mod remote;
pub mod roadmap;
pub mod scorer;
