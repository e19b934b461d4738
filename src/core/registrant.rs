// The registrant captured from console input for one run.
//
// Purpose
// - Carry the name and email the user typed, exactly as typed.
//
// Boundaries
// - No validation and no normalization: empty strings are legal values.
// - Immutable after creation; lives only for the duration of one run.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registrant {
    pub name: String,
    pub email: String,
}
