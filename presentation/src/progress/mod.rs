//! Progress display while deliveries are in flight

pub mod spinner;
