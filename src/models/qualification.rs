use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationCategory {
    Dfw,
    Nearby,
    TexasFar,
    OutsideTx,
    Unknown,
}

impl LocationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationCategory::Dfw => "dfw",
            LocationCategory::Nearby => "nearby",
            LocationCategory::TexasFar => "texas_far",
            LocationCategory::OutsideTx => "outside_tx",
            LocationCategory::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    Bathroom,
    Kitchen,
    Flooring,
    WholeHome,
    SmallRepair,
    Exterior,
    OtherInterior,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Bathroom => "bathroom",
            ProjectCategory::Kitchen => "kitchen",
            ProjectCategory::Flooring => "flooring",
            ProjectCategory::WholeHome => "whole_home",
            ProjectCategory::SmallRepair => "small_repair",
            ProjectCategory::Exterior => "exterior",
            ProjectCategory::OtherInterior => "other_interior",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Bathroom => "bathroom remodel",
            ProjectCategory::Kitchen => "kitchen remodel",
            ProjectCategory::Flooring => "flooring project",
            ProjectCategory::WholeHome => "whole-home renovation",
            ProjectCategory::SmallRepair => "small repair",
            ProjectCategory::Exterior => "exterior project",
            ProjectCategory::OtherInterior => "interior project",
        }
    }

    /// Project types the business does not take on.
    pub fn is_excluded(&self) -> bool {
        matches!(self, ProjectCategory::SmallRepair | ProjectCategory::Exterior)
    }
}
