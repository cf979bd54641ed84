//! One module per subcommand.

pub mod completions;
pub mod decode;
pub mod encode;
pub mod inspect;
