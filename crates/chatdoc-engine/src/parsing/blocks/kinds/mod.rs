pub mod bullet;
pub mod code_fence;
pub mod heading;

pub use bullet::Bullet;
pub use code_fence::CodeFence;
pub use heading::Heading;
