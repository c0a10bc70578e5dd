use clap::ValueEnum;

/// Status bucket used by the list and table views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FilterMode {
    #[default]
    All,
    /// present or retard on the selected date
    Present,
    /// everything else: absent, conge or unmarked
    Absent,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Present => "present",
            FilterMode::Absent => "absent",
        }
    }
}
