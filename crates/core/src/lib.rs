pub mod config;
pub mod error;
pub mod format;
pub mod padding;
pub mod sample;
pub mod template;
pub mod variables;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::format::OutputFormat;
    pub use crate::padding::PaddingPolicy;
    pub use crate::sample::DataSource;
    pub use crate::template::{render, RenderOptions, TargetKind};
    pub use crate::variables::{variables_for, VariableContext, VariableDefinition};
}
