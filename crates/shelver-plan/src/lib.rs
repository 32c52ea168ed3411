//! Copy planning: name assembly, collision grouping, destination paths and
//! pre-flight validation.
//!
//! Planning is pure apart from [`validate::check_sources`] and the
//! directory filter in suffix mode; nothing here mutates the filesystem.
//! The whole record set is planned and validated before the first copy.

pub mod assemble;
pub mod group;
pub mod path;
pub mod plan;
pub mod validate;

pub use assemble::assemble_base_name;
pub use group::assign_extra_ids;
pub use path::destination_dir;
pub use plan::{PlanOutcome, PlannedCopy, plan_hierarchy, plan_suffix};
pub use validate::{ValidationReport, Violation, check_sources};
