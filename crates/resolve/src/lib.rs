pub mod assemble;
pub mod literal;
pub mod resolver;
pub mod rules;

// Re-export main types
pub use assemble::{assemble, assemble_report, AssembleOptions, Assembler, Assembly, HEADER};
pub use resolver::{resolve, CssRule, Resolver};
pub use rules::{UtilityRule, RULES};
