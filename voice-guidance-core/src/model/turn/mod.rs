mod turn_direction;
mod turn_item;

pub use turn_direction::TurnDirection;
pub use turn_item::TurnItem;
