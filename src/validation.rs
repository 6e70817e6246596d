//! Input validation for simulation requests.
//!
//! Checks the integrity of a process list against a chosen discipline
//! before simulation. Detects:
//! - Empty input
//! - Duplicate process identifiers
//! - Negative arrival times and non-positive burst times
//! - Missing or non-positive priorities (Priority discipline)
//! - Non-positive quantum (Round Robin)
//!
//! The simulators re-check only the preconditions they cannot run
//! without; this module is the collaborator-facing pre-flight that
//! gathers every problem at once for display to the user.

use std::collections::HashSet;

use crate::models::Process;
use crate::sim::Discipline;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process list is empty.
    EmptyInput,
    /// Two processes share the same identifier.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has a burst of zero or less.
    NonPositiveBurst,
    /// The Priority discipline was chosen but a process has no priority.
    MissingPriority,
    /// The Priority discipline was chosen with a priority of zero or less.
    NonPositivePriority,
    /// Round Robin was chosen with a quantum of zero or less.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list against the chosen discipline.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(processes: &[Process], discipline: &Discipline) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "process list is empty",
        ));
    }

    let mut ids = HashSet::new();
    for process in processes {
        if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }
        if process.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    process.id, process.arrival
                ),
            ));
        }
        if process.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    process.id, process.burst
                ),
            ));
        }
    }

    if let Discipline::RoundRobin { quantum } = discipline {
        if *quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Round Robin quantum must be positive (got {quantum})"),
            ));
        }
    }

    if matches!(discipline, Discipline::Priority { .. }) {
        for process in processes {
            match process.priority {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::MissingPriority,
                    format!("Process '{}' has no priority value", process.id),
                )),
                Some(priority) if priority <= 0 => errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositivePriority,
                    format!(
                        "Process '{}' has non-positive priority {priority}",
                        process.id
                    ),
                )),
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 3, 2).with_priority(1),
        ]
    }

    #[test]
    fn test_valid_input() {
        let processes = sample_processes();
        assert!(validate_input(&processes, &Discipline::Fcfs).is_ok());
        assert!(validate_input(&processes, &Discipline::RoundRobin { quantum: 2 }).is_ok());
        assert!(validate_input(&processes, &Discipline::Priority { preemptive: false }).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_input(&[], &Discipline::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyInput));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P1", 1, 2)];
        let errors = validate_input(&processes, &Discipline::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new("P1", -1, 5)];
        let errors = validate_input(&processes, &Discipline::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new("P1", 0, 0)];
        let errors = validate_input(&processes, &Discipline::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_priority_checks_only_apply_to_priority_discipline() {
        let processes = vec![Process::new("P1", 0, 5)]; // No priority set.
        assert!(validate_input(&processes, &Discipline::Sjf).is_ok());

        let errors =
            validate_input(&processes, &Discipline::Priority { preemptive: true }).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingPriority));
    }

    #[test]
    fn test_non_positive_priority() {
        let processes = vec![Process::new("P1", 0, 5).with_priority(-2)];
        let errors =
            validate_input(&processes, &Discipline::Priority { preemptive: false }).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositivePriority));
    }

    #[test]
    fn test_non_positive_quantum() {
        let processes = sample_processes();
        let errors =
            validate_input(&processes, &Discipline::RoundRobin { quantum: 0 }).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveQuantum));
    }

    #[test]
    fn test_multiple_errors_are_collected() {
        let processes = vec![
            Process::new("P1", -1, 0), // Negative arrival and zero burst.
            Process::new("P1", 0, 3),  // Duplicate ID, no priority.
        ];
        let errors =
            validate_input(&processes, &Discipline::Priority { preemptive: false }).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
