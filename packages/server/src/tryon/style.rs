use std::fmt;
use std::str::FromStr;

use sea_orm::prelude::StringLen;
use serde::{Deserialize, Serialize};

/// Camera pose of the generated model.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    sea_orm::DeriveActiveEnum,
    sea_orm::EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum Pose {
    #[sea_orm(string_value = "front")]
    Front,
    #[sea_orm(string_value = "side")]
    Side,
    #[sea_orm(string_value = "back")]
    Back,
}

impl Pose {
    pub const ALL: &'static [Pose] = &[Self::Front, Self::Side, Self::Back];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Side => "side",
            Self::Back => "back",
        }
    }

    /// How the pose is phrased in generation prompts.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Front => {
                "front-facing pose with arms naturally by the sides, looking directly at camera"
            }
            Self::Side => "elegant side profile pose showing the saree draping, three-quarter turn",
            Self::Back => {
                "back view showing the pleats and the pallu falling gracefully over the shoulder"
            }
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pose {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|pose| pose.as_str() == s)
            .ok_or(())
    }
}

/// Blouse cut worn under the saree.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    sea_orm::DeriveActiveEnum,
    sea_orm::EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum BlouseStyle {
    #[sea_orm(string_value = "traditional")]
    Traditional,
    #[sea_orm(string_value = "modern")]
    Modern,
    #[sea_orm(string_value = "sleeveless")]
    Sleeveless,
    #[sea_orm(string_value = "full_sleeve")]
    FullSleeve,
}

impl BlouseStyle {
    pub const ALL: &'static [BlouseStyle] = &[
        Self::Traditional,
        Self::Modern,
        Self::Sleeveless,
        Self::FullSleeve,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::Modern => "modern",
            Self::Sleeveless => "sleeveless",
            Self::FullSleeve => "full_sleeve",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Traditional => "traditional fitted blouse with short sleeves",
            Self::Modern => "modern stylish blouse with contemporary cut",
            Self::Sleeveless => "sleeveless blouse design",
            Self::FullSleeve => "full sleeve blouse with elegant design",
        }
    }
}

impl fmt::Display for BlouseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlouseStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or(())
    }
}

/// Render a set of values as `a, b, c` for error messages.
pub fn join_values<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
