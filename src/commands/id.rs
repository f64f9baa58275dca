//! `routerbits id` command.

use crate::context::ServiceContext;

/// Print `count` identifiers, one per line.
///
/// # Errors
///
/// Never fails; returns `Result` for uniformity with other handlers.
pub fn run(ctx: &ServiceContext, count: usize) -> Result<(), String> {
    for id in generate(ctx, count) {
        println!("{id}");
    }
    Ok(())
}

fn generate(ctx: &ServiceContext, count: usize) -> Vec<String> {
    (0..count).map(|_| ctx.id_gen.generate_id()).collect()
}
