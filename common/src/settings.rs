use serde::{Deserialize, Serialize};

/// The user preferences that survive a restart.
///
/// Field order is the on-disk order: three `f64` followed by one `bool`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ClockSettings {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
    #[serde(with = "byte_bool")]
    pub enable_date: bool,
}
impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            value: 1.0,
            enable_date: true,
        }
    }
}

/// A bool stored as one byte. Written as 0 or 1, any nonzero byte reads as true.
mod byte_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        u8::deserialize(deserializer).map(|byte| byte != 0)
    }
}
