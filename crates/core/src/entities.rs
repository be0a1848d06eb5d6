//! Player, enemy, and item entities built from the component types.

pub mod enemy;
pub mod item;
pub mod player;

pub use enemy::Enemy;
pub use item::Item;
pub use player::Player;
