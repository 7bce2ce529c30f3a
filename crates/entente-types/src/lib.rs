//! Shared type definitions for the Entente alliance registry.
//!
//! Types defined here flow downstream to `TypeScript` via `ts-rs` for
//! reporting front-ends.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for player identifiers
//! - [`structs`] -- The [`Player`] entity

pub mod ids;
pub mod structs;

pub use ids::PlayerId;
pub use structs::Player;

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::PlayerId::export_all();
        let _ = crate::structs::Player::export_all();
    }
}
