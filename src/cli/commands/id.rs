//! `inno_bundle id`: app id generation.

use crate::cli::IdArgs;
use crate::error::Result;
use uuid::Uuid;

/// Generates an id for `inno_bundle.id`.
///
/// With a namespace the id is a v5 UUID in the URL namespace, so the same
/// namespace always yields the same id; otherwise it is random (v4).
pub fn generate(ns: Option<&str>) -> Uuid {
    match ns {
        Some(ns) => Uuid::new_v5(&Uuid::NAMESPACE_URL, ns.trim().as_bytes()),
        None => Uuid::new_v4(),
    }
}

/// Prints a new id to stdout.
pub fn execute(args: &IdArgs) -> Result<i32> {
    let id = generate(args.ns.as_deref());
    log::info!("Add it to pubspec.yaml as inno_bundle.id");
    println!("{id}");
    Ok(0)
}
