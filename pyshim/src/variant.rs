use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Compiled,
    Source,
}

impl Variant {
    /// Suffix appended to the base path to find this variant.
    pub fn suffix(self) -> &'static str {
        match self {
            Variant::Compiled => ".pyc",
            Variant::Source => ".py",
        }
    }
}
