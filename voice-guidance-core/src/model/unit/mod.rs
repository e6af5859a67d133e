mod length_unit;

pub use length_unit::LengthUnit;
