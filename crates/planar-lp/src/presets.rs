//! Bundled example problems.

use serde::{Deserialize, Serialize};

use crate::model::{Constraint, ObjectiveFunction, Problem};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Two products sharing two capacity limits.
    Startup,
    Production,
    /// Cost minimization with a demand floor.
    Mix,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Startup, Preset::Production, Preset::Mix];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Startup => "startup",
            Preset::Production => "production",
            Preset::Mix => "mix",
        }
    }

    /// Case-insensitive lookup by `name()`.
    pub fn from_name(name: &str) -> Option<Preset> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn problem(self) -> Problem {
        match self {
            Preset::Startup => Problem::new(
                ObjectiveFunction::maximize(250.0, 300.0),
                vec![
                    Constraint::le(20.0, 15.0, 600.0),
                    Constraint::le(10.0, 15.0, 450.0),
                ],
            ),
            Preset::Production => Problem::new(
                ObjectiveFunction::maximize(400.0, 300.0),
                vec![
                    Constraint::le(2.0, 1.0, 100.0),
                    Constraint::le(1.0, 2.0, 80.0),
                ],
            ),
            Preset::Mix => Problem::new(
                ObjectiveFunction::minimize(20.0, 30.0),
                vec![
                    Constraint::ge(1.0, 1.0, 40.0),
                    Constraint::le(2.0, 1.0, 80.0),
                ],
            ),
        }
    }
}
