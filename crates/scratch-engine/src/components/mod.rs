pub mod card;
pub mod typewriter;
