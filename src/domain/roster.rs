// Roster: the immutable input record for a team formation run.
//
// The raw data arrives as parallel sequences (one productivity column plus
// five 0/1 tag columns); `Roster::from_columns` checks that carrier and
// converts it into typed records so the rest of the crate never sees a
// half-tagged developer.

use serde::{Deserialize, Serialize};

/// Errors raised while constructing a [`Roster`], before any model is built.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("column '{column}' has {actual} entries, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("column '{column}' has non-binary value {value} at index {index}")]
    InvalidTagValue {
        column: &'static str,
        index: usize,
        value: u8,
    },

    #[error("developer {index} must carry exactly one of frontend/backend/full-stack")]
    RoleConflict { index: usize },

    #[error("developer {index} must carry exactly one of senior/junior")]
    SeniorityConflict { index: usize },

    #[error("roster is empty")]
    EmptyRoster,

    #[error("team count must be at least 1, got {0}")]
    InvalidTeamCount(usize),
}

/// Primary skill area of a developer. Exactly one per developer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Frontend,
    Backend,
    FullStack,
}

/// Experience level of a developer. Exactly one per developer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Senior,
    Junior,
}

/// A single developer in the roster. Identity is positional: a developer is
/// referred to everywhere by its index in the roster order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    pub productivity: f64,
    pub role: Role,
    pub seniority: Seniority,
    pub international: bool,
}

impl Developer {
    pub fn new(productivity: f64, role: Role, seniority: Seniority) -> Self {
        Self {
            productivity,
            role,
            seniority,
            international: false,
        }
    }

    pub fn international(mut self) -> Self {
        self.international = true;
        self
    }

    pub fn is_frontend(&self) -> bool {
        self.role == Role::Frontend
    }

    pub fn is_backend(&self) -> bool {
        self.role == Role::Backend
    }

    pub fn is_full_stack(&self) -> bool {
        self.role == Role::FullStack
    }

    pub fn is_senior(&self) -> bool {
        self.seniority == Seniority::Senior
    }

    pub fn is_junior(&self) -> bool {
        self.seniority == Seniority::Junior
    }
}

/// Borrowed column-oriented form of the roster input: one productivity
/// column and five binary tag columns, all of equal length.
#[derive(Debug, Clone, Copy)]
pub struct RosterColumns<'a> {
    pub productivity: &'a [f64],
    pub frontend: &'a [u8],
    pub backend: &'a [u8],
    pub full_stack: &'a [u8],
    pub senior: &'a [u8],
    pub junior: &'a [u8],
    pub international: &'a [u8],
}

/// Ordered, immutable collection of developers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    developers: Vec<Developer>,
}

impl Roster {
    /// Builds a roster from typed records. Rejects an empty roster.
    pub fn new(developers: Vec<Developer>) -> Result<Self, InputError> {
        if developers.is_empty() {
            return Err(InputError::EmptyRoster);
        }
        Ok(Self { developers })
    }

    /// Builds a roster from the parallel-column carrier.
    ///
    /// Every tag column must match the productivity column in length and
    /// contain only 0 or 1; each developer must have exactly one role tag
    /// and exactly one seniority tag.
    pub fn from_columns(columns: RosterColumns<'_>) -> Result<Self, InputError> {
        let len = columns.productivity.len();
        if len == 0 {
            return Err(InputError::EmptyRoster);
        }

        let tag_columns = [
            ("frontend", columns.frontend),
            ("backend", columns.backend),
            ("full_stack", columns.full_stack),
            ("senior", columns.senior),
            ("junior", columns.junior),
            ("international", columns.international),
        ];

        for (name, column) in tag_columns {
            if column.len() != len {
                return Err(InputError::LengthMismatch {
                    column: name,
                    expected: len,
                    actual: column.len(),
                });
            }
            if let Some((index, &value)) =
                column.iter().enumerate().find(|(_, &v)| v > 1)
            {
                return Err(InputError::InvalidTagValue {
                    column: name,
                    index,
                    value,
                });
            }
        }

        let mut developers = Vec::with_capacity(len);
        for i in 0..len {
            let role = match (
                columns.frontend[i],
                columns.backend[i],
                columns.full_stack[i],
            ) {
                (1, 0, 0) => Role::Frontend,
                (0, 1, 0) => Role::Backend,
                (0, 0, 1) => Role::FullStack,
                _ => return Err(InputError::RoleConflict { index: i }),
            };
            let seniority = match (columns.senior[i], columns.junior[i]) {
                (1, 0) => Seniority::Senior,
                (0, 1) => Seniority::Junior,
                _ => return Err(InputError::SeniorityConflict { index: i }),
            };
            let mut developer = Developer::new(columns.productivity[i], role, seniority);
            developer.international = columns.international[i] == 1;
            developers.push(developer);
        }

        Ok(Self { developers })
    }

    pub fn len(&self) -> usize {
        self.developers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.developers.is_empty()
    }

    pub fn developers(&self) -> &[Developer] {
        &self.developers
    }

    pub fn total_productivity(&self) -> f64 {
        self.developers.iter().map(|d| d.productivity).sum()
    }

    /// Global per-developer average productivity, unrounded.
    pub fn average_productivity(&self) -> f64 {
        self.total_productivity() / self.developers.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_columns() -> (Vec<f64>, [Vec<u8>; 6]) {
        (
            vec![85.0, 75.0, 90.0],
            [
                vec![1, 0, 0], // frontend
                vec![0, 1, 0], // backend
                vec![0, 0, 1], // full_stack
                vec![1, 0, 1], // senior
                vec![0, 1, 0], // junior
                vec![1, 0, 0], // international
            ],
        )
    }

    fn columns<'a>(p: &'a [f64], t: &'a [Vec<u8>; 6]) -> RosterColumns<'a> {
        RosterColumns {
            productivity: p,
            frontend: &t[0],
            backend: &t[1],
            full_stack: &t[2],
            senior: &t[3],
            junior: &t[4],
            international: &t[5],
        }
    }

    #[test]
    fn builds_typed_records_from_columns() {
        let (p, t) = sample_columns();
        let roster = Roster::from_columns(columns(&p, &t)).unwrap();

        assert_eq!(roster.len(), 3);
        let devs = roster.developers();
        assert_eq!(devs[0].role, Role::Frontend);
        assert_eq!(devs[1].role, Role::Backend);
        assert_eq!(devs[2].role, Role::FullStack);
        assert_eq!(devs[0].seniority, Seniority::Senior);
        assert_eq!(devs[1].seniority, Seniority::Junior);
        assert!(devs[0].international);
        assert!(!devs[1].international);
    }

    #[test]
    fn average_is_unrounded() {
        let (p, t) = sample_columns();
        let roster = Roster::from_columns(columns(&p, &t)).unwrap();
        assert!((roster.average_productivity() - 250.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_length_mismatch() {
        let (p, mut t) = sample_columns();
        t[4] = vec![0, 1];
        let err = Roster::from_columns(columns(&p, &t)).unwrap_err();
        assert_eq!(
            err,
            InputError::LengthMismatch {
                column: "junior",
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn rejects_non_binary_tag() {
        let (p, mut t) = sample_columns();
        t[0] = vec![1, 2, 0];
        let err = Roster::from_columns(columns(&p, &t)).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidTagValue {
                column: "frontend",
                index: 1,
                value: 2,
            }
        );
    }

    #[test]
    fn rejects_double_role() {
        let (p, mut t) = sample_columns();
        t[1] = vec![1, 1, 0]; // developer 0 now frontend and backend
        let err = Roster::from_columns(columns(&p, &t)).unwrap_err();
        assert_eq!(err, InputError::RoleConflict { index: 0 });
    }

    #[test]
    fn rejects_missing_seniority() {
        let (p, mut t) = sample_columns();
        t[3] = vec![0, 0, 1];
        t[4] = vec![0, 0, 0];
        let err = Roster::from_columns(columns(&p, &t)).unwrap_err();
        assert_eq!(err, InputError::SeniorityConflict { index: 0 });
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Roster::new(Vec::new()).unwrap_err(), InputError::EmptyRoster);
    }

    #[test]
    fn developer_record_round_trips_through_json() {
        let dev = Developer::new(82.5, Role::FullStack, Seniority::Junior).international();
        let json = serde_json::to_string(&dev).unwrap();
        let back: Developer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dev);
    }
}
