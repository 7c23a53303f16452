//! ## Background
//!
//! A distributed database stores its rows in a storage layer whose nodes can run part of a query
//! next to the data, in a coprocessor. Every physical plan therefore has to decide, operator by
//! operator, whether the operator is pushed down into the storage layer or evaluated by the
//! coordinating process after the rows have crossed the network.
//!
//! This crate implements the cost model behind that decision. A plan enumerator walks the plan
//! bottom up and keeps, for every candidate subtree, a [`task::TaskProfile`]: where the subtree
//! runs, its estimated cost and its estimated number of output rows. Trying an operator as the
//! next step up means attaching it to the profiles of its children, which yields a new profile
//! and leaves the children untouched, so that alternatives can be compared freely.
//!
//! ## Design
//!
//! * [`task`] Cop and root task profiles.
//! * [`operator`] Physical operators and their attachment rules.
//! * [`cost`] Cost constants and the configurable cost model.
//! * [`plan`] Physical plan nodes shared between task profiles.
//! * [`explain`] Human readable task profiles.
//!
//! A cop task keeps two subtrees: the index plan and, when rows have to be looked up by primary
//! key after the index scan, the table plan. Selections are split so that predicates computable
//! from the index columns alone run before the lookup.
//!
//! ## Reference
//!
//! 1. Selinger, P. Griffiths, et al. "Access path selection in a relational database management
//! system." Readings in Artificial Intelligence and Databases. Morgan Kaufmann, 1989. 511-522.

#[macro_use]
extern crate prettytable;

pub mod cost;
pub mod error;
pub mod explain;
pub mod operator;
pub mod optimizer;
pub mod plan;
pub mod properties;
pub mod task;
