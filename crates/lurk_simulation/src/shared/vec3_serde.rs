//! serde адаптеры: `Vec3` ⇄ `[f32; 3]`.
//!
//! Bevy собран без feature `serialize`, поэтому glam типы не реализуют serde
//! сами. Использование: `#[serde(with = "crate::shared::vec3_serde")]` для
//! одиночного вектора, `vec3_serde::list` для `Vec<Vec3>`.

use bevy::prelude::Vec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(value: &Vec3, serializer: S) -> Result<S::Ok, S::Error> {
    value.to_array().serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
    <[f32; 3]>::deserialize(deserializer).map(Vec3::from_array)
}

pub mod list {
    use super::*;

    pub fn serialize<S: Serializer>(values: &[Vec3], serializer: S) -> Result<S::Ok, S::Error> {
        let arrays: Vec<[f32; 3]> = values.iter().map(|v| v.to_array()).collect();
        arrays.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Vec3>, D::Error> {
        let arrays = Vec::<[f32; 3]>::deserialize(deserializer)?;
        Ok(arrays.into_iter().map(Vec3::from_array).collect())
    }
}
