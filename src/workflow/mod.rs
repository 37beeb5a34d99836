pub mod compile_flow;
pub mod test_ctx;

pub use compile_flow::{CompileFlow, CompiledTest};
pub use test_ctx::TestCtx;
