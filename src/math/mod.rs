pub mod mat3;
pub mod vec2;
