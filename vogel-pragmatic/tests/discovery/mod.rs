//! Contains tests which discover solver behavior on generated problems.
