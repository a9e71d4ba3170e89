//! Species tag shared by the field, the statistics layer, and output.

/// The two agent classes living on the field.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Prey,
    Predator,
}

impl Species {
    /// Every species, in the order statistics report them.
    pub const ALL: [Species; 2] = [Species::Prey, Species::Predator];

    /// Human-readable label, used in population reports and CSV headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Prey     => "Prey",
            Species::Predator => "Predator",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
