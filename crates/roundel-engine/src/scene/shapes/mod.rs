//! Shape draw payloads and their `DrawList` push helpers.

pub mod circle;
