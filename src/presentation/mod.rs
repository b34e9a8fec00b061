//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use stackdef::presentation::factory;
//!
//! let use_case = factory::create_compile_use_case();
//! let result = use_case.execute(&options)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::create_compile_use_case;
pub use output::{create_renderer, OutputFormat, PlanRenderer};
