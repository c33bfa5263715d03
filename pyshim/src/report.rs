use serde::Serialize;

use crate::variant::Variant;

#[derive(Serialize)]
pub struct Resolution {
    pub base: String,
    pub compiled: CandidateInfo,
    pub source: CandidateInfo,
    pub selected: Option<Variant>,
    /// Command line that would run; empty when nothing was selected.
    pub command: Vec<String>,
}

#[derive(Serialize)]
pub struct CandidateInfo {
    pub path: String,
    pub exists: bool,
}
