// src/normalization/mod.rs - Field-level normalizers for raw listing cells
pub mod brand;
pub mod color;
pub mod identity;
pub mod key;
pub mod lineup;
pub mod options;
pub mod token;
pub mod trim;
