// Generated by dbc_gen. Do not edit.
#![allow(non_camel_case_types, non_snake_case, dead_code, unused_variables, unused_mut, unused_imports, unreachable_patterns)]

use dbc_gen::rt;

pub const NAME: &str = "StatusMsg";
pub const ID: u32 = 300;
pub const DLC: u32 = 8;
pub const TRANSMITTER: &str = "ECU2";
pub const COMMENT: &str = "";
pub const IS_MULTIPLEXED: bool = false;
pub const SIGNAL_COUNT: usize = 2;
pub const SIGNAL_NAMES: [&str; 2] = ["Counter", "Voltage"];

pub mod Counter {
    pub const START_BIT: u32 = 7;
    pub const LENGTH: u32 = 8;
    pub const LITTLE_ENDIAN: bool = false;
    pub const IS_SIGNED: bool = false;
    pub const SCALE: f64 = 1.0;
    pub const OFFSET: f64 = 0.0;
    pub const MINIMUM: f64 = 0.0;
    pub const MAXIMUM: f64 = 255.0;
    pub const UNIT: &str = "";
}

pub mod Voltage {
    pub const START_BIT: u32 = 15;
    pub const LENGTH: u32 = 16;
    pub const LITTLE_ENDIAN: bool = false;
    pub const IS_SIGNED: bool = false;
    pub const SCALE: f64 = 0.001;
    pub const OFFSET: f64 = 0.0;
    pub const MINIMUM: f64 = 0.0;
    pub const MAXIMUM: f64 = 65.535;
    pub const UNIT: &str = "V";
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMsg {
    pub Counter: u64,
    pub Voltage: f64,
}

impl StatusMsg {
    pub fn new() -> Self {
        StatusMsg {
            Counter: 0,
            Voltage: 0.0,
        }
    }

    /// Unpacks one frame payload into the struct fields.
    pub fn decode(&mut self, data: &[u8; 8]) -> bool {
        self.Counter = rt::extract_bits(data, 7, 8, false);
        self.Voltage = rt::extract_bits(data, 15, 16, false) as f64 * 0.001 + 0.0;
        true
    }

    /// Packs the struct fields into a frame payload.
    pub fn encode(&self) -> [u8; 8] {
        let mut data = [0u8; 8];
        rt::insert_bits(&mut data, 7, 8, false, rt::clamp_unsigned(self.Counter, 8));
        rt::insert_bits(&mut data, 15, 16, false, rt::to_raw(self.Voltage, 0.001, 0.0, 16, false));
        data
    }
}

impl Default for StatusMsg {
    fn default() -> Self {
        StatusMsg::new()
    }
}
